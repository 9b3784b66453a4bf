//! Calorie Counting

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["2022", "sum"])]
pub struct Solver;

impl AocParser for Solver {
    /// Calories carried by each elf, largest first
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut totals = input
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(elf, group)| {
                group
                    .lines()
                    .map(|l| l.trim().parse::<u64>())
                    .sum::<Result<u64, _>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(elf {}) {e}", elf + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        totals.sort_unstable_by(|a, b| b.cmp(a));
        Ok(totals)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.first().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().take(3).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["24000", "45000"]);
    }

    #[test]
    fn test_bad_calories() {
        let err = <Solver as AocParser>::parse("1\n\n2x\n").unwrap_err();
        assert!(err.to_string().contains("elf 2"), "{err}");
    }
}
