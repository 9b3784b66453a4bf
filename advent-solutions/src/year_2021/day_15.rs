//! Chiton

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{solve_failed, Adjacency, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["2021", "grid", "dijkstra"])]
pub struct Solver;

const TILES: usize = 5;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse_digits(input)?;
        if grid.values().any(|&risk| risk == 0) {
            return Err(ParseError::InvalidFormat("risk levels must be 1-9".into()));
        }
        Ok(grid)
    }
}

/// Lowest total risk from the top-left to the bottom-right corner
fn lowest_risk(risk: &Grid<u8>) -> Result<u64, SolveError> {
    let start = Point::ORIGIN;
    let goal = Point::new(risk.width() as i64 - 1, risk.height() as i64 - 1);

    let mut best = risk.map(|_| u64::MAX);
    best.set(start, 0)?;
    let mut queue = BinaryHeap::from([Reverse((0u64, start))]);

    while let Some(Reverse((cost, point))) = queue.pop() {
        if point == goal {
            return Ok(cost);
        }
        if cost > *best.get(point)? {
            continue;
        }
        for next in risk.neighbors(point, Adjacency::Orthogonal) {
            let next_cost = cost + u64::from(*risk.get(next)?);
            let slot = best.get_mut(next)?;
            if next_cost < *slot {
                *slot = next_cost;
                queue.push(Reverse((next_cost, next)));
            }
        }
    }
    Err(solve_failed("bottom-right corner is unreachable"))
}

/// Tile the map 5×5, adding the tile distance and wrapping 9 back to 1
fn expand(risk: &Grid<u8>) -> Grid<u8> {
    let (w, h) = (risk.width(), risk.height());
    Grid::from_fn(w * TILES, h * TILES, |p| {
        let (x, y) = (p.x as usize, p.y as usize);
        let base = risk
            .get(Point::new((x % w) as i64, (y % h) as i64))
            .copied()
            .unwrap_or(1);
        let shift = (x / w + y / h) as u8;
        (base - 1 + shift) % 9 + 1
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lowest_risk(shared)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let full = expand(shared);
        log::debug!("expanded map to {}x{}", full.width(), full.height());
        Ok(lowest_risk(&full)?.to_string())
    }
}
