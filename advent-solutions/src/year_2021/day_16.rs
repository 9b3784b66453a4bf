//! Packet Decoder

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{anyhow, bail, ensure};

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 16, tags = ["2021", "bits", "parser"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Literal {
        version: u8,
        value: u64,
    },
    Operator {
        version: u8,
        type_id: u8,
        children: Vec<Packet>,
    },
}

/// MSB-first reader over the bits of a hex transmission
struct BitReader {
    bits: Vec<bool>,
    pos: usize,
}

impl BitReader {
    fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let mut bits = Vec::with_capacity(hex.len() * 4);
        for c in hex.chars() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| anyhow!("invalid hex digit {c:?}"))?;
            bits.extend((0..4).rev().map(|shift| nibble >> shift & 1 == 1));
        }
        Ok(Self { bits, pos: 0 })
    }

    fn read(&mut self, count: usize) -> anyhow::Result<u64> {
        ensure!(count <= 64, "cannot read {count} bits at once");
        let end = self.pos + count;
        let bits = self
            .bits
            .get(self.pos..end)
            .ok_or_else(|| anyhow!("transmission ended at bit {} while reading {count}", self.bits.len()))?;
        self.pos = end;
        Ok(bits.iter().fold(0, |acc, &b| acc << 1 | u64::from(b)))
    }

    fn packet(&mut self) -> anyhow::Result<Packet> {
        let version = self.read(3)? as u8;
        let type_id = self.read(3)? as u8;

        if type_id == 4 {
            let mut value = 0u64;
            loop {
                let more = self.read(1)? == 1;
                value = value
                    .checked_mul(16)
                    .ok_or_else(|| anyhow!("literal overflows 64 bits"))?
                    | self.read(4)?;
                if !more {
                    break;
                }
            }
            return Ok(Packet::Literal { version, value });
        }

        let mut children = Vec::new();
        if self.read(1)? == 0 {
            let length = self.read(15)? as usize;
            let end = self.pos + length;
            while self.pos < end {
                children.push(self.packet()?);
            }
            ensure!(self.pos == end, "sub-packets overran their length");
        } else {
            let count = self.read(11)?;
            for _ in 0..count {
                children.push(self.packet()?);
            }
        }
        Ok(Packet::Operator {
            version,
            type_id,
            children,
        })
    }
}

impl Packet {
    fn version_sum(&self) -> u64 {
        match self {
            Packet::Literal { version, .. } => u64::from(*version),
            Packet::Operator {
                version, children, ..
            } => u64::from(*version) + children.iter().map(Packet::version_sum).sum::<u64>(),
        }
    }

    fn eval(&self) -> anyhow::Result<u64> {
        let (type_id, children) = match self {
            Packet::Literal { value, .. } => return Ok(*value),
            Packet::Operator {
                type_id, children, ..
            } => (*type_id, children),
        };
        let values = children
            .iter()
            .map(Packet::eval)
            .collect::<anyhow::Result<Vec<_>>>()?;

        let compare = |cmp: fn(&u64, &u64) -> bool| -> anyhow::Result<u64> {
            match values.as_slice() {
                [a, b] => Ok(u64::from(cmp(a, b))),
                other => bail!("comparison needs 2 operands, got {}", other.len()),
            }
        };

        match type_id {
            0 => values
                .iter()
                .try_fold(0u64, |acc, &v| acc.checked_add(v))
                .ok_or_else(|| anyhow!("sum overflows 64 bits")),
            1 => values
                .iter()
                .try_fold(1u64, |acc, &v| acc.checked_mul(v))
                .ok_or_else(|| anyhow!("product overflows 64 bits")),
            2 => values.iter().min().copied().ok_or_else(|| anyhow!("minimum of nothing")),
            3 => values.iter().max().copied().ok_or_else(|| anyhow!("maximum of nothing")),
            5 => compare(u64::gt),
            6 => compare(u64::lt),
            7 => compare(u64::eq),
            other => bail!("unknown operator type {other}"),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Packet;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // Trailing bits after the outermost packet are zero padding
        BitReader::from_hex(input.trim())
            .and_then(|mut reader| reader.packet())
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.version_sum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .eval()
            .map(|v| v.to_string())
            .map_err(|e| solve_failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_literal() {
        assert_eq!(
            <Solver as AocParser>::parse("D2FE28").unwrap(),
            Packet::Literal {
                version: 6,
                value: 2021
            }
        );
    }

    #[test]
    fn test_version_sums() {
        for (hex, expected) in [
            ("8A004A801A8002F478", "16"),
            ("620080001611562C8802118E34", "12"),
            ("C0015000016115A2E0802F182340", "23"),
            ("A0016C880162017C3686B18A3D4780", "31"),
        ] {
            assert_eq!(solve_part::<Solver>(hex, 1), expected, "{hex}");
        }
    }

    #[test]
    fn test_evaluation() {
        for (hex, expected) in [
            ("C200B40A82", "3"),
            ("04005AC33890", "54"),
            ("880086C3E88112", "7"),
            ("CE00C43D881120", "9"),
            ("D8005AC2A8F0", "1"),
            ("F600BC2D8F", "0"),
            ("9C005AC2F8F0", "0"),
            ("9C0141080250320F1802104A08", "1"),
        ] {
            assert_eq!(solve_part::<Solver>(hex, 2), expected, "{hex}");
        }
    }

    #[test]
    fn test_overflowing_product_fails() {
        // Product of two 2^40 literals
        let packet = <Solver as AocParser>::parse("2600A48C210842108401246108421084200").unwrap();
        assert_eq!(packet.version_sum(), 9);
        assert!(matches!(
            <Solver as PartSolver<2>>::solve(&mut packet.clone()),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_truncated_transmission() {
        assert!(<Solver as AocParser>::parse("D2F").is_err());
        assert!(<Solver as AocParser>::parse("XYZ").is_err());
    }
}
