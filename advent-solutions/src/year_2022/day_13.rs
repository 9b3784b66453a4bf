//! Distress Signal

use std::cmp::Ordering;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use serde_json::Value;

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["2022", "recursion", "sorting"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub enum Packet {
    Int(u64),
    List(Vec<Packet>),
}

impl TryFrom<Value> for Packet {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .map(Packet::Int)
                .ok_or_else(|| format!("{n} is not a non-negative integer")),
            Value::Array(items) => items
                .into_iter()
                .map(Packet::try_from)
                .collect::<Result<_, _>>()
                .map(Packet::List),
            other => Err(format!("unexpected value {other}")),
        }
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => [Packet::Int(*a)].as_slice().cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(b)) => a.as_slice().cmp([Packet::Int(*b)].as_slice()),
        }
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn divider(n: u64) -> Packet {
    Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Packet>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let value: Value = serde_json::from_str(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1)))?;
                Packet::try_from(value)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 2 != 0 {
            return Err(solve_failed(format!("{} packets do not form pairs", shared.len())));
        }
        let total: usize = shared
            .iter()
            .tuples()
            .enumerate()
            .filter(|(_, (left, right))| left < right)
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (low, high) = (divider(2), divider(6));
        // Each divider's position is one more than the packets that sort before it
        let low_pos = 1 + shared.iter().filter(|p| **p < low).count();
        let high_pos = 2 + shared.iter().filter(|p| **p < high).count();
        Ok((low_pos * high_pos).to_string())
    }
}
