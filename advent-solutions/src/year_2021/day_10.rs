//! Syntax Scoring

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 10, tags = ["2021", "stack"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Complete,
    /// First closing character that did not match
    Corrupted(char),
    /// Closers needed to finish the line, innermost first
    Incomplete(Vec<char>),
}

fn closer(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check_line(line: &str) -> Result<Chunk, String> {
    let mut expected = Vec::new();
    for c in line.chars() {
        if let Some(close) = closer(c) {
            expected.push(close);
        } else if matches!(c, ')' | ']' | '}' | '>') {
            if expected.pop() != Some(c) {
                return Ok(Chunk::Corrupted(c));
            }
        } else {
            return Err(format!("unexpected character {c:?}"));
        }
    }
    if expected.is_empty() {
        Ok(Chunk::Complete)
    } else {
        expected.reverse();
        Ok(Chunk::Incomplete(expected))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Chunk>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                check_line(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = shared
            .iter()
            .map(|chunk| match chunk {
                Chunk::Corrupted(')') => 3,
                Chunk::Corrupted(']') => 57,
                Chunk::Corrupted('}') => 1197,
                Chunk::Corrupted('>') => 25137,
                _ => 0,
            })
            .sum();
        Ok(score.to_string())
    }
}

fn completion_score(closers: &[char]) -> u64 {
    closers.iter().fold(0, |acc, c| {
        acc * 5
            + match c {
                ')' => 1,
                ']' => 2,
                '}' => 3,
                _ => 4,
            }
    })
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores: Vec<u64> = shared
            .iter()
            .filter_map(|chunk| match chunk {
                Chunk::Incomplete(closers) => Some(completion_score(closers)),
                _ => None,
            })
            .collect();
        if scores.is_empty() {
            return Err(solve_failed("no incomplete lines"));
        }
        scores.sort_unstable();
        Ok(scores[scores.len() / 2].to_string())
    }
}
