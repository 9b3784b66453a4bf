//! Rope Bridge

use std::collections::HashSet;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{Direction, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["2022", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Direction, u32)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let err = || ParseError::InvalidFormat(format!("(line {}) expected 'D n', got {line:?}", idx + 1));
                let (letter, steps) = line.trim().split_once(' ').ok_or_else(err)?;
                let mut letters = letter.chars();
                let direction = match (letters.next(), letters.next()) {
                    (Some(c), None) => Direction::from_letter(c).ok_or_else(err)?,
                    _ => return Err(err()),
                };
                Ok((direction, steps.parse().map_err(|_| err())?))
            })
            .collect()
    }
}

/// Move `knot` one step toward `leader` unless they already touch
fn follow(knot: Point, leader: Point) -> Point {
    if knot.is_touching(leader) {
        knot
    } else {
        knot.offset((leader.x - knot.x).signum(), (leader.y - knot.y).signum())
    }
}

/// Number of distinct cells the last of `length` knots visits
fn tail_visits(moves: &[(Direction, u32)], length: usize) -> usize {
    let mut rope = vec![Point::ORIGIN; length.max(1)];
    let mut visited = HashSet::from([Point::ORIGIN]);
    for &(direction, steps) in moves {
        for _ in 0..steps {
            rope[0] = rope[0].step(direction);
            for i in 1..rope.len() {
                rope[i] = follow(rope[i], rope[i - 1]);
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).to_string())
    }
}
