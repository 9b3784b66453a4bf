//! Transparent Origami

use std::collections::HashSet;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::{solve_failed, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 13, tags = ["2021", "geometry", "render"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    Left(i64),
    Up(i64),
}

impl Fold {
    /// Reflect `p` across the fold line; `None` if it lands off the sheet
    fn apply(self, p: Point) -> Option<Point> {
        let folded = match self {
            Fold::Left(line) if p.x > line => Point::new(2 * line - p.x, p.y),
            Fold::Up(line) if p.y > line => Point::new(p.x, 2 * line - p.y),
            _ => p,
        };
        (folded.x >= 0 && folded.y >= 0).then_some(folded)
    }
}

#[derive(Debug)]
pub struct Manual {
    dots: HashSet<Point>,
    folds: Vec<Fold>,
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (dots, folds) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected dots, a blank line, then folds".into()))?;

        let dots = dots
            .lines()
            .map(|l| l.parse::<Point>())
            .collect::<Result<HashSet<_>, _>>()?;

        let fold_re = Regex::new(r"^fold along ([xy])=(\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let folds = folds
            .lines()
            .map(|line| {
                let caps = fold_re
                    .captures(line.trim())
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad fold {line:?}")))?;
                let at: i64 = caps[2]
                    .parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("{e}")))?;
                Ok(if &caps[1] == "x" { Fold::Left(at) } else { Fold::Up(at) })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Manual { dots, folds })
    }
}

fn fold_all(dots: &HashSet<Point>, folds: &[Fold]) -> Result<HashSet<Point>, SolveError> {
    folds.iter().try_fold(dots.clone(), |dots, &fold| {
        dots.into_iter()
            .map(|p| {
                fold.apply(p)
                    .ok_or_else(|| solve_failed(format!("{fold:?} moves dot {p} off the sheet")))
            })
            .collect()
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = shared
            .folds
            .first()
            .ok_or_else(|| solve_failed("no fold instructions"))?;
        Ok(fold_all(&shared.dots, std::slice::from_ref(first))?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let dots = fold_all(&shared.dots, &shared.folds)?;

        // The sheet shrinks to the last fold along each axis
        let max_x = dots.iter().map(|p| p.x).max().unwrap_or(0);
        let max_y = dots.iter().map(|p| p.y).max().unwrap_or(0);
        let width = shared
            .folds
            .iter()
            .filter_map(|f| match f {
                Fold::Left(x) => Some(*x),
                Fold::Up(_) => None,
            })
            .min()
            .unwrap_or(max_x + 1);
        let height = shared
            .folds
            .iter()
            .filter_map(|f| match f {
                Fold::Up(y) => Some(*y),
                Fold::Left(_) => None,
            })
            .min()
            .unwrap_or(max_y + 1);

        let sheet = Grid::from_fn(width as usize, height as usize, |p| {
            if dots.contains(&p) { '#' } else { '.' }
        });
        log::debug!("folded sheet:\n{sheet}");
        Ok(format!("\n{sheet}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn test_sample() {
        let answers = solve_parts::<Solver>(SAMPLE);
        assert_eq!(answers[0], "17");
        assert_eq!(
            answers[1],
            "\n#####\n#...#\n#...#\n#...#\n#####\n.....\n....."
        );
    }

    #[test]
    fn test_fold_reflects_across_line() {
        assert_eq!(Fold::Up(7).apply(Point::new(0, 14)), Some(Point::new(0, 0)));
        assert_eq!(Fold::Left(5).apply(Point::new(6, 3)), Some(Point::new(4, 3)));
        assert_eq!(Fold::Left(5).apply(Point::new(2, 3)), Some(Point::new(2, 3)));
        assert_eq!(Fold::Left(2).apply(Point::new(5, 0)), None);
    }

    #[test]
    fn test_fold_past_the_edge_fails() {
        let mut manual = <Solver as AocParser>::parse("5,0\n1,1\n\nfold along x=2\n").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut manual),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
