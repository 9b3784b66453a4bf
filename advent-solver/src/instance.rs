//! A parsed puzzle input ready to be solved part by part

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// One solved part and when it ran
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Input for one puzzle day, parsed once by `S` and kept for every part
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for `year`/`day`, timing the parse
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        log::debug!(
            "{year}/{day:02}: parsed {} bytes in {}µs",
            input.len(),
            (parse_end - parse_start).num_microseconds().unwrap_or_default()
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// ```no_run
/// use advent_solver::SolverRegistryBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = SolverRegistryBuilder::new().register_all_plugins()?.build();
/// let input = std::fs::read_to_string("inputs/2021/day01.txt")?;
/// let mut sonar = registry.create_solver(2021, 1, &input)?;
/// for part in 1..=sonar.parts() {
///     let result = sonar.solve(part)?;
///     println!("2021/01 part {part}: {} in {}", result.answer, result.duration());
/// }
/// println!("parsed in {}", sonar.parse_duration());
/// # Ok(())
/// # }
/// ```
pub trait DynSolver {
    /// Solve `part`; parts outside `1..=parts()` are `PartOutOfRange`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();
        log::trace!("{}/{:02} part {part}: {answer:?}", self.year, self.day);

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
