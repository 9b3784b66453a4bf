//! Seven Segment Search

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{anyhow, bail, ensure};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 8, tags = ["2021", "deduction"])]
pub struct Solver;

/// Wire set as a bit mask, `a` = bit 0 .. `g` = bit 6
type Segments = u8;

#[derive(Debug)]
pub struct Display {
    one: Segments,
    four: Segments,
    outputs: [Segments; 4],
}

fn segments(word: &str) -> anyhow::Result<Segments> {
    word.bytes().try_fold(0u8, |mask, b| match b {
        b'a'..=b'g' => Ok(mask | 1u8 << (b - b'a')),
        _ => Err(anyhow!("invalid segment {:?} in {word:?}", b as char)),
    })
}

fn parse_display(line: &str) -> anyhow::Result<Display> {
    let (patterns, outputs) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' separator"))?;
    let patterns = patterns
        .split_whitespace()
        .map(segments)
        .collect::<anyhow::Result<Vec<_>>>()?;
    ensure!(patterns.len() == 10, "expected 10 patterns, got {}", patterns.len());

    let find = |len: u32| {
        patterns
            .iter()
            .copied()
            .find(|p| p.count_ones() == len)
            .ok_or_else(|| anyhow!("no pattern with {len} segments"))
    };
    let one = find(2)?;
    let four = find(4)?;

    let outputs: Vec<Segments> = outputs
        .split_whitespace()
        .map(segments)
        .collect::<anyhow::Result<_>>()?;
    let outputs: [Segments; 4] = outputs
        .try_into()
        .map_err(|v: Vec<Segments>| anyhow!("expected 4 output digits, got {}", v.len()))?;

    Ok(Display { one, four, outputs })
}

impl Display {
    /// Identify a digit from its segment count and overlap with 1 and 4
    fn decode_digit(&self, digit: Segments) -> anyhow::Result<u32> {
        let with_one = (digit & self.one).count_ones();
        let with_four = (digit & self.four).count_ones();
        Ok(match (digit.count_ones(), with_one, with_four) {
            (2, _, _) => 1,
            (3, _, _) => 7,
            (4, _, _) => 4,
            (7, _, _) => 8,
            (5, 2, _) => 3,
            (5, _, 3) => 5,
            (5, _, 2) => 2,
            (6, _, 4) => 9,
            (6, 2, _) => 0,
            (6, 1, _) => 6,
            _ => bail!("cannot decode segments {digit:07b}"),
        })
    }

    fn value(&self) -> anyhow::Result<u32> {
        self.outputs
            .iter()
            .try_fold(0, |acc, &d| Ok(acc * 10 + self.decode_digit(d)?))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Display>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                parse_display(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let easy = shared
            .iter()
            .flat_map(|d| d.outputs)
            .filter(|o| matches!(o.count_ones(), 2 | 3 | 4 | 7))
            .count();
        Ok(easy.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for display in shared.iter() {
            let value = display
                .value()
                .map_err(|e| SolveError::SolveFailed(e.into()))?;
            log::trace!("decoded display value {value}");
            total += u64::from(value);
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["26", "61229"]);
    }

    #[test]
    fn test_single_display() {
        let line = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";
        assert_eq!(parse_display(line).unwrap().value().unwrap(), 5353);
    }

    #[test]
    fn test_rejects_missing_outputs() {
        assert!(<Solver as AocParser>::parse("ab abc abcd | ab\n").is_err());
    }
}
