//! Dive!

use std::str::FromStr;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{anyhow, bail};

use crate::utils::parse;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["2021", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, amount) = s
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<direction> <amount>', got {s:?}"))?;
        let amount: i64 = amount.trim().parse()?;
        Ok(match word {
            "forward" => Command::Forward(amount),
            "down" => Command::Down(amount),
            "up" => Command::Up(amount),
            other => bail!("unknown direction {other:?}"),
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (position, depth) = shared
            .iter()
            .fold((0, 0), |(position, depth), command| match *command {
                Command::Forward(n) => (position + n, depth),
                Command::Down(n) => (position, depth + n),
                Command::Up(n) => (position, depth - n),
            });
        Ok((position * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (position, depth, _aim) =
            shared
                .iter()
                .fold((0, 0, 0), |(position, depth, aim), command| match *command {
                    Command::Forward(n) => (position + n, depth + aim * n, aim),
                    Command::Down(n) => (position, depth, aim + n),
                    Command::Up(n) => (position, depth, aim - n),
                });
        Ok((position * depth).to_string())
    }
}
