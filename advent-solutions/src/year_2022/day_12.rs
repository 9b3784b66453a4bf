//! Hill Climbing Algorithm

use std::collections::VecDeque;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{solve_failed, Adjacency, Grid, GridError, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["2022", "grid", "bfs"])]
pub struct Solver;

#[derive(Debug)]
pub struct Hill {
    elevation: Grid<u8>,
    start: Point,
    /// Fewest steps from each square to the summit
    steps_to_summit: Grid<Option<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Hill;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut elevation = Grid::parse_chars(input)?;
        let start = elevation
            .find(&b'S')
            .ok_or_else(|| ParseError::MissingData("start marker 'S'".into()))?;
        elevation.set(start, b'a')?;
        let summit = elevation
            .find(&b'E')
            .ok_or_else(|| ParseError::MissingData("summit marker 'E'".into()))?;
        elevation.set(summit, b'z')?;
        if let Some((point, &ch)) = elevation.iter().find(|(_, c)| !c.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected {:?} at {point}",
                ch as char
            )));
        }
        Ok(Hill {
            steps_to_summit: distances_to(&elevation, summit)?,
            elevation,
            start,
        })
    }
}

/// Breadth-first search backwards from `summit`: a step down may drop any
/// height but a step up climbs at most one
fn distances_to(elevation: &Grid<u8>, summit: Point) -> Result<Grid<Option<u32>>, GridError> {
    let mut dist = elevation.map(|_| None);
    dist.set(summit, Some(0))?;
    let mut queue = VecDeque::from([(summit, 0u32)]);
    while let Some((point, steps)) = queue.pop_front() {
        let height = *elevation.get(point)?;
        for prev in elevation.neighbors(point, Adjacency::Orthogonal) {
            if *elevation.get(prev)? + 1 < height {
                continue;
            }
            let slot = dist.get_mut(prev)?;
            if slot.is_none() {
                *slot = Some(steps + 1);
                queue.push_back((prev, steps + 1));
            }
        }
    }
    Ok(dist)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let steps = *shared.steps_to_summit.get(shared.start)?;
        steps
            .map(|steps| steps.to_string())
            .ok_or_else(|| solve_failed("summit is unreachable from the start"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let dist = &shared.steps_to_summit;
        shared
            .elevation
            .find_all(&b'a')
            .filter_map(|p| dist.get(p).ok().copied().flatten())
            .min()
            .map(|steps| steps.to_string())
            .ok_or_else(|| solve_failed("summit is unreachable from every lowest square"))
    }
}
