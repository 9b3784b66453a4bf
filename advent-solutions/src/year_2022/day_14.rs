//! Regolith Reservoir

use std::collections::HashSet;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::{solve_failed, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["2022", "simulation"])]
pub struct Solver;

const SOURCE: Point = Point::new(500, 0);

#[derive(Debug, Clone)]
pub struct Cave {
    rock: HashSet<Point>,
    lowest_rock: i64,
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut rock = HashSet::new();
        for (idx, line) in input.lines().enumerate() {
            let err = |msg: String| ParseError::InvalidFormat(format!("(line {}) {msg}", idx + 1));
            if line.trim().is_empty() {
                continue;
            }
            let corners = line
                .split("->")
                .map(|p| p.trim().parse::<Point>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| err(e.to_string()))?;
            if let [single] = corners.as_slice() {
                rock.insert(*single);
            }
            for (from, to) in corners.iter().tuple_windows() {
                let segment = from
                    .line_to(*to)
                    .filter(|_| from.x == to.x || from.y == to.y)
                    .ok_or_else(|| err(format!("segment {from} -> {to} is not straight")))?;
                rock.extend(segment);
            }
        }
        let lowest_rock = rock
            .iter()
            .map(|p| p.y)
            .max()
            .ok_or_else(|| ParseError::MissingData("no rock paths".into()))?;
        if rock.iter().any(|p| p.y < 0) || rock.contains(&SOURCE) {
            return Err(ParseError::InvalidFormat("rock above or at the sand source".into()));
        }
        Ok(Cave { rock, lowest_rock })
    }
}

/// Drop sand until a grain would fall past the rock or the source is blocked,
/// returning how many grains came to rest
fn pour(cave: &Cave, floor: Option<i64>) -> u64 {
    let mut blocked = cave.rock.clone();
    let mut resting = 0;
    // Path of the previous grain; the next one follows it to the last open cell
    let mut path = vec![SOURCE];
    while let Some(&grain) = path.last() {
        if floor.is_none() && grain.y > cave.lowest_rock {
            break;
        }
        let next = [grain.offset(0, 1), grain.offset(-1, 1), grain.offset(1, 1)]
            .into_iter()
            .find(|p| !blocked.contains(p) && floor.is_none_or(|f| p.y < f));
        match next {
            Some(p) => path.push(p),
            None => {
                blocked.insert(grain);
                resting += 1;
                path.pop();
            }
        }
    }
    resting
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour(shared, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let floor = shared
            .lowest_rock
            .checked_add(2)
            .ok_or_else(|| solve_failed("rock is too deep for a floor"))?;
        Ok(pour(shared, Some(floor)).to_string())
    }
}
