//! Extended Polymerization

use std::collections::HashMap;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::memo::{DpCache, DpProblem, HashMapBackend};
use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 14, tags = ["2021", "dp"])]
pub struct Solver;

type Counts = [u64; 26];

#[derive(Debug)]
pub struct Polymer {
    template: Vec<u8>,
    rules: HashMap<(u8, u8), u8>,
}

/// Letter counts of a pair expanded `steps` times, excluding its right letter
///
/// Excluding the right letter lets adjacent pairs be summed without double
/// counting the letter they share.
struct PairExpansion<'a> {
    rules: &'a HashMap<(u8, u8), u8>,
}

type PairSteps = (u8, u8, usize);

impl DpProblem<PairSteps, Counts> for PairExpansion<'_> {
    fn deps(&self, &(left, right, steps): &PairSteps) -> Vec<PairSteps> {
        match (steps, self.rules.get(&(left, right))) {
            (0, _) | (_, None) => vec![],
            (_, Some(&mid)) => vec![(left, mid, steps - 1), (mid, right, steps - 1)],
        }
    }

    fn compute(&self, &(left, _, _): &PairSteps, deps: Vec<Counts>) -> Counts {
        let mut counts = [0; 26];
        if deps.is_empty() {
            counts[usize::from(left - b'A')] = 1;
        }
        for dep in deps {
            for (total, n) in counts.iter_mut().zip(dep) {
                *total += n;
            }
        }
        counts
    }
}

fn spread_after(polymer: &Polymer, steps: usize) -> Result<u64, SolveError> {
    let cache = DpCache::with_problem(
        HashMapBackend::new(),
        PairExpansion {
            rules: &polymer.rules,
        },
    );

    let mut counts = [0u64; 26];
    for (&left, &right) in polymer.template.iter().tuple_windows() {
        for (total, n) in counts.iter_mut().zip(cache.get(&(left, right, steps))) {
            *total += n;
        }
    }
    if let Some(&last) = polymer.template.last() {
        counts[usize::from(last - b'A')] += 1;
    }

    match counts.iter().filter(|&&n| n > 0).minmax() {
        itertools::MinMaxResult::MinMax(min, max) => Ok(max - min),
        itertools::MinMaxResult::OneElement(_) => Ok(0),
        itertools::MinMaxResult::NoElements => Err(solve_failed("empty polymer")),
    }
}

fn element(b: u8) -> Result<u8, ParseError> {
    if b.is_ascii_uppercase() {
        Ok(b)
    } else {
        Err(ParseError::InvalidFormat(format!(
            "element {:?} is not an uppercase letter",
            b as char
        )))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Polymer;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (template, rules) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected template, a blank line, then rules".into()))?;

        let template = template
            .trim()
            .bytes()
            .map(element)
            .collect::<Result<Vec<_>, _>>()?;

        let rules = rules
            .lines()
            .map(|line| {
                let (pair, insert) = line.split_once(" -> ").ok_or_else(|| {
                    ParseError::InvalidFormat(format!("expected 'AB -> C', got {line:?}"))
                })?;
                match (pair.trim().as_bytes(), insert.trim().as_bytes()) {
                    (&[a, b], &[c]) => Ok(((element(a)?, element(b)?), element(c)?)),
                    _ => Err(ParseError::InvalidFormat(format!("bad rule {line:?}"))),
                }
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Polymer { template, rules })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread_after(shared, 10)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread_after(shared, 40)?.to_string())
    }
}
