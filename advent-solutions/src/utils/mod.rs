//! Helpers shared between puzzle solutions

pub mod grid;
pub mod memo;
pub mod parse;

pub use grid::{Adjacency, Direction, Grid, GridError, Point};

/// Wrap an ad hoc error message for a solve-time failure
pub(crate) fn solve_failed(msg: impl Into<String>) -> advent_solver::SolveError {
    let msg: String = msg.into();
    advent_solver::SolveError::SolveFailed(msg.into())
}

#[cfg(test)]
pub(crate) mod testing {
    use advent_solver::{DynSolver, Solver, SolverInstance};

    /// Parse `input` once and solve each part in order
    pub fn solve_parts<S: Solver>(input: &str) -> Vec<String> {
        let mut instance = SolverInstance::<S>::new(0, 0, input).expect("parse failed");
        (1..=S::PARTS)
            .map(|part| instance.solve(part).expect("solve failed").answer)
            .collect()
    }

    /// Parse `input` and solve a single part
    pub fn solve_part<S: Solver>(input: &str, part: u8) -> String {
        let mut instance = SolverInstance::<S>::new(0, 0, input).expect("parse failed");
        instance.solve(part).expect("solve failed").answer
    }
}
