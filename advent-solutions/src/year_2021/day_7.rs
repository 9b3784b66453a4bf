//! The Treachery of Whales

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["2021", "optimization"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut positions: Vec<i64> = parse::csv(input)?;
        if positions.is_empty() {
            return Err(ParseError::MissingData("no crab positions".into()));
        }
        positions.sort_unstable();
        Ok(positions)
    }
}

fn total_fuel(positions: &[i64], target: i64, cost: impl Fn(i64) -> i64) -> i64 {
    positions.iter().map(|p| cost((p - target).abs())).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // The median minimises the sum of absolute distances
        let median = shared[shared.len() / 2];
        Ok(total_fuel(shared, median, |d| d).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (lo, hi) = (shared[0], shared[shared.len() - 1]);
        let best = (lo..=hi)
            .map(|target| total_fuel(shared, target, |d| d * (d + 1) / 2))
            .min()
            .unwrap_or_default();
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    #[test]
    fn test_sample() {
        assert_eq!(
            solve_parts::<Solver>("16,1,2,0,4,2,7,1,2,14\n"),
            vec!["37", "168"]
        );
    }

    #[test]
    fn test_single_crab() {
        assert_eq!(solve_parts::<Solver>("5"), vec!["0", "0"]);
    }
}
