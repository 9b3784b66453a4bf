//! Lanternfish

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::memo::{DpCache, DpProblem, VecBackend};
use crate::utils::parse;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["2021", "dp"])]
pub struct Solver;

const RESET_TIMER: usize = 6;
const NEWBORN_TIMER: usize = 8;

/// Population descended from one fish whose timer is 0 with `index` days left
struct Descendants;

impl Descendants {
    fn spawn_timers() -> [usize; 2] {
        [RESET_TIMER, NEWBORN_TIMER]
    }
}

impl DpProblem<usize, u64> for Descendants {
    fn deps(&self, days: &usize) -> Vec<usize> {
        match days.checked_sub(1) {
            None => vec![],
            Some(rest) => Self::spawn_timers()
                .into_iter()
                .filter(|&timer| rest > timer)
                .map(|timer| rest - timer)
                .collect(),
        }
    }

    fn compute(&self, days: &usize, deps: Vec<u64>) -> u64 {
        if *days == 0 {
            return 1;
        }
        // A fish that never reaches timer 0 again counts as itself
        let settled = Self::spawn_timers()
            .into_iter()
            .filter(|&timer| days - 1 <= timer)
            .count() as u64;
        settled + deps.iter().sum::<u64>()
    }
}

fn population(timers: &[u8], days: usize) -> u64 {
    let cache = DpCache::with_problem(VecBackend::with_capacity(days + 1), Descendants);
    timers
        .iter()
        .map(|&timer| {
            let timer = usize::from(timer);
            if days <= timer { 1 } else { cache.get(&(days - timer)) }
        })
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let timers: Vec<u8> = parse::csv(input)?;
        if let Some(bad) = timers.iter().find(|&&t| usize::from(t) > NEWBORN_TIMER) {
            return Err(ParseError::InvalidFormat(format!("timer {bad} is out of range")));
        }
        Ok(timers)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    #[test]
    fn test_sample() {
        assert_eq!(
            solve_parts::<Solver>("3,4,3,1,2\n"),
            vec!["5934", "26984457539"]
        );
    }

    #[test]
    fn test_short_horizons() {
        let timers = [3, 4, 3, 1, 2];
        assert_eq!(population(&timers, 0), 5);
        assert_eq!(population(&timers, 18), 26);
        assert_eq!(population(&[0], 1), 2);
    }
}
