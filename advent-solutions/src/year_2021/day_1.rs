//! Sonar Sweep

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021", "sliding-window"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared, 3).to_string())
    }
}

/// Count windows of `window` readings whose sum grew
///
/// Consecutive windows share all but their first and last element, so only
/// those two need comparing.
fn count_increases(depths: &[u32], window: usize) -> usize {
    depths
        .windows(window + 1)
        .filter(|w| w[window] > w[0])
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["7", "5"]);
    }

    #[test]
    fn test_short_input() {
        assert_eq!(solve_parts::<Solver>("5\n"), vec!["0", "0"]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(<Solver as AocParser>::parse("1\nabc\n").is_err());
    }
}
