//! Monkey in the Middle

use std::collections::VecDeque;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{anyhow, bail, Context};
use regex::Regex;

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["2022", "simulation", "modular"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(u64),
    Mul(u64),
    Square,
}

impl Operation {
    /// New worry level, or `None` if it does not fit in a `u64`
    fn apply(self, old: u64) -> Option<u64> {
        match self {
            Operation::Add(n) => old.checked_add(n),
            Operation::Mul(n) => old.checked_mul(n),
            Operation::Square => old.checked_mul(old),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: VecDeque<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn parse_monkey(re: &Regex, block: &str, expected_id: usize) -> anyhow::Result<Monkey> {
    let caps = re
        .captures(block.trim())
        .ok_or_else(|| anyhow!("unrecognised monkey description"))?;

    let id: usize = caps["id"].parse()?;
    if id != expected_id {
        bail!("expected monkey {expected_id}, found monkey {id}");
    }

    let items = caps["items"]
        .split(',')
        .map(|item| item.trim().parse::<u64>())
        .collect::<Result<VecDeque<_>, _>>()
        .context("starting items")?;

    let operation = match (&caps["op"], &caps["rhs"]) {
        ("*", "old") => Operation::Square,
        ("*", n) => Operation::Mul(n.parse()?),
        ("+", n) => Operation::Add(n.parse()?),
        (op, rhs) => bail!("unsupported operation 'old {op} {rhs}'"),
    };

    let divisor: u64 = caps["divisor"].parse()?;
    if divisor == 0 {
        bail!("divisor must be positive");
    }

    Ok(Monkey {
        items,
        operation,
        divisor,
        if_true: caps["if_true"].parse()?,
        if_false: caps["if_false"].parse()?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(
            r"(?x)
            ^Monkey\s+(?P<id>\d+):\s*
            Starting\ items:\s*(?P<items>[\d,\ ]*?)\s*
            Operation:\s*new\s*=\s*old\s*(?P<op>[*+])\s*(?P<rhs>old|\d+)\s*
            Test:\s*divisible\s+by\s+(?P<divisor>\d+)\s*
            If\ true:\s*throw\ to\ monkey\s+(?P<if_true>\d+)\s*
            If\ false:\s*throw\ to\ monkey\s+(?P<if_false>\d+)$",
        )
        .map_err(|e| ParseError::Other(e.to_string()))?;

        let monkeys = input
            .replace("\r\n", "\n")
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .enumerate()
            .map(|(idx, block)| {
                parse_monkey(&re, block, idx)
                    .map_err(|e| ParseError::InvalidFormat(format!("(monkey {idx}) {e:#}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if monkeys.is_empty() {
            return Err(ParseError::MissingData("no monkeys".into()));
        }
        for (idx, monkey) in monkeys.iter().enumerate() {
            let targets = [monkey.if_true, monkey.if_false];
            if targets.iter().any(|&t| t >= monkeys.len() || t == idx) {
                return Err(ParseError::InvalidFormat(format!(
                    "(monkey {idx}) throws to an invalid target"
                )));
            }
        }
        Ok(monkeys)
    }
}

/// Play `rounds` rounds and multiply the two highest inspection counts
fn monkey_business(monkeys: &[Monkey], rounds: usize, relief: bool) -> Result<u64, SolveError> {
    let mut monkeys = monkeys.to_vec();
    // Every test divisor divides this, so reducing by it keeps all tests intact.
    // Integer division does not commute with it, hence only without relief.
    let modulus = monkeys
        .iter()
        .try_fold(1u64, |acc, m| acc.checked_mul(m.divisor))
        .ok_or_else(|| solve_failed("product of test divisors overflows u64"))?;
    let mut inspected = vec![0u64; monkeys.len()];

    for _ in 0..rounds {
        for idx in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[idx].items);
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[idx];
            inspected[idx] += items.len() as u64;
            for item in items {
                let mut worry = operation.apply(item).ok_or_else(|| {
                    solve_failed(format!("monkey {idx} worry level overflows u64 on item {item}"))
                })?;
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push_back(worry);
            }
        }
    }

    inspected.sort_unstable_by(|a, b| b.cmp(a));
    log::debug!("inspection counts after {rounds} rounds: {inspected:?}");
    match inspected.as_slice() {
        [first, second, ..] => first
            .checked_mul(*second)
            .ok_or_else(|| solve_failed("monkey business overflows u64")),
        _ => Err(solve_failed("monkey business needs at least two monkeys")),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 20, true)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 10_000, false)?.to_string())
    }
}
