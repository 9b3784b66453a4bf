//! Supply Stacks

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["2022", "stack", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug)]
pub struct Cargo {
    /// Bottom crate first
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

/// Parse the crate drawing; the last line numbers the stacks
fn parse_drawing(drawing: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let mut lines: Vec<&str> = drawing.lines().collect();
    let labels = lines
        .pop()
        .ok_or_else(|| ParseError::MissingData("crate drawing".into()))?;
    let count = labels.split_whitespace().count();
    if count == 0 {
        return Err(ParseError::MissingData("stack numbers".into()));
    }

    let mut stacks = vec![Vec::new(); count];
    for line in lines.iter().rev() {
        let bytes = line.as_bytes();
        for (idx, stack) in stacks.iter_mut().enumerate() {
            match bytes.get(1 + 4 * idx) {
                Some(b' ') | None => {}
                Some(&label) if label.is_ascii_uppercase() => stack.push(label),
                Some(&other) => {
                    return Err(ParseError::InvalidFormat(format!(
                        "unexpected crate {:?} in {line:?}",
                        other as char
                    )));
                }
            }
        }
    }
    Ok(stacks)
}

impl AocParser for Solver {
    type SharedData<'a> = Cargo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // Leading spaces on the first drawing line are significant
        let input = input.trim_start_matches(['\n', '\r']);
        let (drawing, moves) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected a drawing, a blank line, then moves".into()))?;
        let stacks = parse_drawing(drawing)?;

        let re = Regex::new(r"^move (\d+) from (\d+) to (\d+)$").map_err(|e| ParseError::Other(e.to_string()))?;
        let moves = moves
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| {
                let err = || ParseError::InvalidFormat(format!("bad move {line:?}"));
                let caps = re.captures(line.trim()).ok_or_else(err)?;
                let field = |n: usize| caps[n].parse::<usize>().map_err(|_| err());
                let (count, from, to) = (field(1)?, field(2)?, field(3)?);
                let valid = 1..=stacks.len();
                if !valid.contains(&from) || !valid.contains(&to) {
                    return Err(ParseError::InvalidFormat(format!(
                        "{line:?} names a stack outside 1..={}",
                        stacks.len()
                    )));
                }
                Ok(Move {
                    count,
                    from: from - 1,
                    to: to - 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cargo { stacks, moves })
    }
}

/// Run every move; `keep_order` lifts several crates at once
fn rearrange(cargo: &Cargo, keep_order: bool) -> Result<String, SolveError> {
    let mut stacks = cargo.stacks.clone();
    for m in &cargo.moves {
        let source = &mut stacks[m.from];
        let Some(split) = source.len().checked_sub(m.count) else {
            return Err(solve_failed(format!(
                "cannot move {} crates from stack {} holding {}",
                m.count,
                m.from + 1,
                source.len()
            )));
        };
        let mut lifted = source.split_off(split);
        if !keep_order {
            lifted.reverse();
        }
        stacks[m.to].extend(lifted);
    }
    Ok(stacks
        .iter()
        .filter_map(|s| s.last().map(|&c| c as char))
        .collect())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, true)
    }
}
