//! Tuning Trouble

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["2022", "sliding-window"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let stream = input.trim().as_bytes();
        if let Some(bad) = stream.iter().find(|b| !b.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected character {:?} in datastream",
                *bad as char
            )));
        }
        Ok(stream)
    }
}

/// Characters processed when the first window of `size` distinct letters ends
fn marker_end(stream: &[u8], size: usize) -> Result<usize, SolveError> {
    stream
        .windows(size)
        .position(|w| {
            w.iter()
                .fold(0u32, |seen, b| seen | 1u32 << (b - b'a'))
                .count_ones() as usize
                == size
        })
        .map(|start| start + size)
        .ok_or_else(|| solve_failed(format!("no window of {size} distinct characters")))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(marker_end(shared, 4)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(marker_end(shared, 14)?.to_string())
    }
}
