//! Rucksack Reorganization

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["2022", "bits"])]
pub struct Solver;

/// Item set as a bit mask indexed by priority (1-52)
type Items = u64;

#[derive(Debug, Clone, Copy)]
pub struct Rucksack {
    left: Items,
    right: Items,
}

impl Rucksack {
    fn all(&self) -> Items {
        self.left | self.right
    }
}

fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some(u32::from(item - b'a') + 1),
        b'A'..=b'Z' => Some(u32::from(item - b'A') + 27),
        _ => None,
    }
}

fn items(half: &[u8]) -> Option<Items> {
    half.iter()
        .try_fold(0, |set, &b| priority(b).map(|p| set | 1u64 << p))
}

/// Priority of the single item in `set`
fn single_priority(set: Items) -> Result<u32, SolveError> {
    if set.count_ones() == 1 {
        Ok(set.trailing_zeros())
    } else {
        Err(solve_failed(format!(
            "expected exactly one shared item, found {}",
            set.count_ones()
        )))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Rucksack>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(idx, line)| {
                let bytes = line.as_bytes();
                let err = |msg: &str| ParseError::InvalidFormat(format!("(rucksack {}) {msg}", idx + 1));
                if bytes.len() % 2 != 0 {
                    return Err(err("odd number of items"));
                }
                let (left, right) = bytes.split_at(bytes.len() / 2);
                Ok(Rucksack {
                    left: items(left).ok_or_else(|| err("items must be letters"))?,
                    right: items(right).ok_or_else(|| err("items must be letters"))?,
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for sack in shared.iter() {
            total += single_priority(sack.left & sack.right)?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(solve_failed(format!(
                "{} rucksacks do not split into groups of three",
                shared.len()
            )));
        }
        let mut total = 0;
        for (a, b, c) in shared.iter().tuples() {
            total += single_priority(a.all() & b.all() & c.all())?;
        }
        Ok(total.to_string())
    }
}
