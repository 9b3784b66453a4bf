//! Dumbo Octopus

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{solve_failed, Adjacency, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["2021", "grid", "simulation"])]
pub struct Solver;

const FLASH_LEVEL: u8 = 9;
const SYNC_LIMIT: usize = 100_000;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Grid::parse_digits(input)?)
    }
}

/// Advance one step and return how many octopuses flashed
fn step(energy: &mut Grid<u8>) -> usize {
    let mut pending = Vec::new();
    let points: Vec<Point> = energy.points().collect();
    for point in points {
        if let Ok(level) = energy.get_mut(point) {
            *level += 1;
            if *level > FLASH_LEVEL {
                pending.push(point);
            }
        }
    }

    let mut flashed = Vec::new();
    while let Some(point) = pending.pop() {
        flashed.push(point);
        let neighbors: Vec<_> = energy.neighbors(point, Adjacency::All).collect();
        for n in neighbors {
            if let Ok(level) = energy.get_mut(n) {
                *level += 1;
                // Crossing the threshold exactly once queues the flash
                if *level == FLASH_LEVEL + 1 {
                    pending.push(n);
                }
            }
        }
    }

    for point in &flashed {
        if let Ok(level) = energy.get_mut(*point) {
            *level = 0;
        }
    }
    flashed.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = shared.clone();
        let flashes: usize = (0..100).map(|_| step(&mut energy)).sum();
        Ok(flashes.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = shared.clone();
        (1..=SYNC_LIMIT)
            .find(|_| step(&mut energy) == energy.len())
            .map(|s| s.to_string())
            .ok_or_else(|| solve_failed(format!("no synchronised flash within {SYNC_LIMIT} steps")))
    }
}
