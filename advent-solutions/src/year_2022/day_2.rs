//! Rock Paper Scissors

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["2022", "scoring"])]
pub struct Solver;

/// One strategy guide line: the opponent's column (A/B/C) and ours (X/Y/Z),
/// both as `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    theirs: u8,
    ours: u8,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| match line.trim().as_bytes() {
                &[theirs @ b'A'..=b'C', b' ', ours @ b'X'..=b'Z'] => Ok(Round {
                    theirs: theirs - b'A',
                    ours: ours - b'X',
                }),
                _ => Err(ParseError::InvalidFormat(format!(
                    "(line {}) expected '<A-C> <X-Z>', got {line:?}",
                    idx + 1
                ))),
            })
            .collect()
    }
}

/// Shape score (1-3) plus 0 for a loss, 3 for a draw, 6 for a win
fn score(theirs: u8, mine: u8) -> u32 {
    let outcome = match (mine + 3 - theirs) % 3 {
        0 => 3,
        1 => 6,
        _ => 0,
    };
    u32::from(mine) + 1 + outcome
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared.iter().map(|r| score(r.theirs, r.ours)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // X loses, Y draws, Z wins
        let total: u32 = shared
            .iter()
            .map(|r| score(r.theirs, (r.theirs + r.ours + 2) % 3))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>("A Y\nB X\nC Z\n"), vec!["15", "12"]);
    }

    #[test]
    fn test_score_table() {
        assert_eq!(score(0, 0), 4);
        assert_eq!(score(0, 1), 8);
        assert_eq!(score(0, 2), 3);
        assert_eq!(score(2, 0), 7);
    }

    #[test]
    fn test_rejects_bad_column() {
        assert!(<Solver as AocParser>::parse("A W\n").is_err());
    }
}
