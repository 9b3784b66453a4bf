//! Camp Cleanup

use std::ops::RangeInclusive;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["2022", "intervals"])]
pub struct Solver;

type Sections = RangeInclusive<u32>;

fn contains(outer: &Sections, inner: &Sections) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Sections, Sections)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"^(\d+)-(\d+),(\d+)-(\d+)$").map_err(|e| ParseError::Other(e.to_string()))?;
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let err = || ParseError::InvalidFormat(format!("(line {}) expected 'a-b,c-d', got {line:?}", idx + 1));
                let caps = re.captures(line.trim()).ok_or_else(err)?;
                let mut bounds = [0u32; 4];
                for (slot, n) in bounds.iter_mut().zip(1usize..=4) {
                    *slot = caps[n].parse().map_err(|_| err())?;
                }
                let [a, b, c, d] = bounds;
                if a > b || c > d {
                    return Err(err());
                }
                Ok((a..=b, c..=d))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| contains(a, b) || contains(b, a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|(a, b)| overlaps(a, b)).count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["2", "4"]);
    }

    #[test]
    fn test_rejects_reversed_range() {
        assert!(<Solver as AocParser>::parse("4-2,1-1\n").is_err());
    }
}
