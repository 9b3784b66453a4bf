//! Hydrothermal Venture

use std::collections::HashMap;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::Point;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["2021", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Vent {
    start: Point,
    end: Point,
}

impl Vent {
    fn is_orthogonal(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vent>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let err = |msg: String| ParseError::InvalidFormat(format!("(line {}) {msg}", idx + 1));
                let (start, end) = line
                    .split_once("->")
                    .ok_or_else(|| err(format!("expected 'x1,y1 -> x2,y2', got {line:?}")))?;
                let vent = Vent {
                    start: start.trim().parse().map_err(|e| err(format!("{e}")))?,
                    end: end.trim().parse().map_err(|e| err(format!("{e}")))?,
                };
                if vent.start.line_to(vent.end).is_none() {
                    return Err(err("only horizontal, vertical and 45° lines are supported".into()));
                }
                Ok(vent)
            })
            .collect()
    }
}

fn count_overlaps<'a>(vents: impl Iterator<Item = &'a Vent>) -> usize {
    let mut covered: HashMap<Point, u32> = HashMap::new();
    for vent in vents {
        for point in vent.start.line_to(vent.end).unwrap_or_default() {
            *covered.entry(point).or_default() += 1;
        }
    }
    covered.values().filter(|&&n| n >= 2).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter().filter(|v| v.is_orthogonal())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["5", "12"]);
    }

    #[test]
    fn test_rejects_skewed_line() {
        assert!(<Solver as AocParser>::parse("0,0 -> 1,2\n").is_err());
    }
}
