//! Binary Diagnostic

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["2021", "bits"])]
pub struct Solver;

#[derive(Debug)]
pub struct Report {
    width: usize,
    values: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = lines
            .first()
            .map(|l| l.len())
            .ok_or_else(|| ParseError::MissingData("empty report".into()))?;
        if width > 31 {
            return Err(ParseError::InvalidFormat(format!(
                "{width} bit values are not supported"
            )));
        }

        let values = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                if line.len() != width {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) expected {width} bits, got {}",
                        idx + 1,
                        line.len()
                    )));
                }
                u32::from_str_radix(line, 2)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Report { width, values })
    }
}

fn ones_at(values: &[u32], bit: usize) -> usize {
    values.iter().filter(|v| *v >> bit & 1 == 1).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gamma = (0..shared.width)
            .filter(|&bit| ones_at(&shared.values, bit) * 2 >= shared.values.len())
            .fold(0u32, |acc, bit| acc | 1u32 << bit);
        let mask = (1u32 << shared.width) - 1;
        let epsilon = !gamma & mask;
        log::debug!("gamma={gamma:0w$b} epsilon={epsilon:0w$b}", w = shared.width);
        Ok((u64::from(gamma) * u64::from(epsilon)).to_string())
    }
}

/// Narrow the values bit by bit from the most significant one
///
/// `keep_common` keeps the majority bit (ties favour `1`); otherwise the
/// minority bit is kept (ties favour `0`).
fn rating(report: &Report, keep_common: bool) -> Result<u32, SolveError> {
    let mut candidates = report.values.clone();
    for bit in (0..report.width).rev() {
        if candidates.len() <= 1 {
            break;
        }
        let ones = ones_at(&candidates, bit);
        let common = u32::from(ones * 2 >= candidates.len());
        let wanted = if keep_common { common } else { common ^ 1 };
        candidates.retain(|v| v >> bit & 1 == wanted);
    }
    match candidates.as_slice() {
        [single] => Ok(*single),
        _ => Err(solve_failed(format!(
            "rating did not narrow to one value ({} left)",
            candidates.len()
        ))),
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = rating(shared, true)?;
        let co2 = rating(shared, false)?;
        log::debug!("oxygen={oxygen} co2={co2}");
        Ok((u64::from(oxygen) * u64::from(co2)).to_string())
    }
}
