//! Treetop Tree House

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{Direction, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["2022", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Grid::parse_digits(input)?)
    }
}

/// What a tree sees looking one way: trees passed and whether an edge was reached
struct Sightline {
    viewing_distance: u64,
    reaches_edge: bool,
}

fn look(trees: &Grid<u8>, from: Point, direction: Direction) -> Result<Sightline, SolveError> {
    let height = *trees.get(from)?;
    let mut viewing_distance = 0;
    let mut cursor = from.step(direction);
    while trees.contains(cursor) {
        viewing_distance += 1;
        if *trees.get(cursor)? >= height {
            return Ok(Sightline {
                viewing_distance,
                reaches_edge: false,
            });
        }
        cursor = cursor.step(direction);
    }
    Ok(Sightline {
        viewing_distance,
        reaches_edge: true,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visible = 0;
        for tree in shared.points() {
            for direction in Direction::ALL {
                if look(shared, tree, direction)?.reaches_edge {
                    visible += 1;
                    break;
                }
            }
        }
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut best = 0;
        for tree in shared.points() {
            let mut score = 1;
            for direction in Direction::ALL {
                score *= look(shared, tree, direction)?.viewing_distance;
            }
            best = best.max(score);
        }
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "30373\n25512\n65332\n33549\n35390\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["21", "8"]);
    }

    #[test]
    fn test_sightline() {
        let trees = <Solver as AocParser>::parse(SAMPLE).unwrap();
        let up = look(&trees, Point::new(2, 3), Direction::Up).unwrap();
        assert_eq!(up.viewing_distance, 2);
        assert!(!up.reaches_edge);
        let left = look(&trees, Point::new(0, 2), Direction::Left).unwrap();
        assert_eq!(left.viewing_distance, 0);
        assert!(left.reaches_edge);
    }
}
