//! Errors raised while registering, parsing and solving puzzles

use thiserror::Error;

/// A puzzle input that could not be parsed
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A line or block does not match the puzzle's format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle needs never appears (a start marker, a blank line)
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part `0`, or a part above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// Parsed input on which the puzzle has no answer, e.g. an unreachable
    /// goal or a value that overflows
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure to produce an answer for a year/day through the registry
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Years 2015–2034 and days 1–25 only
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
