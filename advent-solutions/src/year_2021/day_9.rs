//! Smoke Basin

use std::collections::HashSet;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{Adjacency, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["2021", "grid", "flood-fill"])]
pub struct Solver;

const RIDGE: u8 = 9;

#[derive(Debug)]
pub struct HeightMap {
    grid: Grid<u8>,
    low_points: Option<Vec<Point>>,
}

impl HeightMap {
    fn low_points(&mut self) -> &[Point] {
        let grid = &self.grid;
        self.low_points.get_or_insert_with(|| {
            grid.iter()
                .filter(|&(p, &height)| {
                    grid.neighbors(p, Adjacency::Orthogonal)
                        .all(|n| grid.get(n).is_ok_and(|&h| h > height))
                })
                .map(|(p, _)| p)
                .collect()
        })
    }

    /// Flood fill from `start` up to the ridges of height 9
    fn basin_size(&self, start: Point) -> usize {
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(point) = stack.pop() {
            for next in self.grid.neighbors(point, Adjacency::Orthogonal) {
                if self.grid.get(next).is_ok_and(|&h| h != RIDGE) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen.len()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = HeightMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(HeightMap {
            grid: Grid::parse_digits(input)?,
            low_points: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lows = shared.low_points().to_vec();
        let mut risk = 0u32;
        for p in lows {
            risk += u32::from(*shared.grid.get(p)?) + 1;
        }
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lows = shared.low_points().to_vec();
        let mut sizes: Vec<usize> = lows.into_iter().map(|p| shared.basin_size(p)).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        log::debug!("largest basins: {:?}", &sizes[..sizes.len().min(3)]);
        Ok(sizes.iter().take(3).product::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["15", "1134"]);
    }

    #[test]
    fn test_low_points() {
        let mut map = <Solver as AocParser>::parse(SAMPLE).unwrap();
        assert_eq!(
            map.low_points(),
            &[
                Point::new(1, 0),
                Point::new(9, 0),
                Point::new(2, 2),
                Point::new(6, 4)
            ]
        );
        assert_eq!(map.basin_size(Point::new(1, 0)), 3);
        assert_eq!(map.basin_size(Point::new(2, 2)), 14);
    }
}
