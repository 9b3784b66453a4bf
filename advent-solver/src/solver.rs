//! Parse and solve traits every puzzle implements

use crate::error::{ParseError, SolveError};

/// Turns a puzzle input into the value both parts work on
///
/// `SharedData` may borrow from the input (`&'a str`, `Vec<&'a str>`) when
/// the parts only need slices of it, or own a parsed structure.
///
/// ```
/// use advent_solver::{AocParser, ParseError};
///
/// /// One sonar depth per line
/// struct SonarSweep;
///
/// impl AocParser for SonarSweep {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(idx, l)| {
///                 l.trim()
///                     .parse()
///                     .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1)))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(SonarSweep::parse("199\n200\n208\n").unwrap(), vec![199, 200, 208]);
/// assert!(SonarSweep::parse("199\ndeep\n").is_err());
/// ```
pub trait AocParser {
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a puzzle
///
/// Parts run in order against the same `SharedData`, so part 1 may leave
/// work behind (a sorted list, a flood-filled grid) for part 2 to reuse.
///
/// ```
/// use advent_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct SonarSweep;
///
/// impl AocParser for SonarSweep {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for SonarSweep {
///     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let increases = depths.windows(2).filter(|w| w[1] > w[0]).count();
///         Ok(increases.to_string())
///     }
/// }
///
/// let mut depths = SonarSweep::parse("199\n200\n208\n210\n200\n").unwrap();
/// assert_eq!(<SonarSweep as PartSolver<1>>::solve(&mut depths).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A puzzle with `PARTS` parts
///
/// Normally derived with `#[derive(AocSolver)]` and
/// `#[aoc_solver(max_parts = N)]`, which routes part `k` to
/// `PartSolver<k>`. Written by hand it looks like this:
///
/// ```
/// use advent_solver::{AocParser, ParseError, SolveError, Solver};
///
/// /// Blank-line separated groups of calorie counts, one group per elf
/// struct CalorieCounting;
///
/// impl AocParser for CalorieCounting {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split("\n\n")
///             .map(|elf| {
///                 elf.lines()
///                     .map(|l| l.parse::<u64>())
///                     .sum::<Result<u64, _>>()
///                     .map_err(|e| ParseError::InvalidFormat(e.to_string()))
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for CalorieCounting {
///     const PARTS: u8 = 2;
///
///     fn solve_part(totals: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         totals.sort_unstable_by(|a, b| b.cmp(a));
///         match part {
///             1 => Ok(totals[0].to_string()),
///             2 => Ok(totals.iter().take(3).sum::<u64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut totals = CalorieCounting::parse("1000\n2000\n\n4000\n\n5000\n6000").unwrap();
/// assert_eq!(CalorieCounting::solve_part(&mut totals, 1).unwrap(), "11000");
/// assert_eq!(CalorieCounting::solve_part(&mut totals, 2).unwrap(), "18000");
/// ```
pub trait Solver: AocParser {
    /// Highest part number; parts are `1..=PARTS`
    const PARTS: u8;

    /// Answer for `part`; `PartNotImplemented` for parts with no solver
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// Reject part `0` and parts above [`Solver::PARTS`] before dispatching
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
