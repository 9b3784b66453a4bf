//! Giant Squid

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{parse, solve_failed, Grid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["2021", "simulation", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Bingo {
    draws: Vec<u32>,
    boards: Vec<Grid<u32>>,
    /// Winning scores in the order the boards complete
    scores: Option<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Bingo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut sections = input.trim().split("\n\n");
        let draws = parse::csv(
            sections
                .next()
                .ok_or_else(|| ParseError::MissingData("draw order".into()))?,
        )?;

        let boards = sections
            .enumerate()
            .map(|(idx, block)| {
                let rows = block
                    .lines()
                    .map(|line| {
                        line.split_whitespace()
                            .map(str::parse::<u32>)
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(board {}) {e}", idx + 1)))?;
                let board = Grid::from_rows(rows)?;
                if board.width() != board.height() {
                    return Err(ParseError::InvalidFormat(format!(
                        "(board {}) expected a square board, got {}x{}",
                        idx + 1,
                        board.width(),
                        board.height()
                    )));
                }
                Ok(board)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if boards.is_empty() {
            return Err(ParseError::MissingData("no boards".into()));
        }

        Ok(Bingo {
            draws,
            boards,
            scores: None,
        })
    }
}

fn has_bingo(marked: &Grid<bool>) -> bool {
    marked.rows().any(|row| row.iter().all(|m| *m))
        || (0..marked.width()).any(|x| {
            marked
                .column(x)
                .is_some_and(|mut column| column.all(|m| *m))
        })
}

/// Play every board to completion and record each winning score in order
fn play(draws: &[u32], boards: &[Grid<u32>]) -> Vec<u32> {
    let mut marked: Vec<Grid<bool>> = boards.iter().map(|b| b.map(|_| false)).collect();
    let mut won = vec![false; boards.len()];
    let mut scores = Vec::new();

    for &draw in draws {
        for (idx, board) in boards.iter().enumerate() {
            if won[idx] {
                continue;
            }
            for point in board.find_all(&draw).collect::<Vec<_>>() {
                if let Ok(cell) = marked[idx].get_mut(point) {
                    *cell = true;
                }
            }
            if has_bingo(&marked[idx]) {
                won[idx] = true;
                let unmarked: u32 = board
                    .values()
                    .zip(marked[idx].values())
                    .filter(|(_, m)| !**m)
                    .map(|(v, _)| v)
                    .sum();
                log::debug!("board {} wins on {draw} with {unmarked} unmarked", idx + 1);
                scores.push(unmarked * draw);
            }
        }
    }
    scores
}

fn scores(bingo: &mut Bingo) -> &[u32] {
    bingo
        .scores
        .get_or_insert_with(|| play(&bingo.draws, &bingo.boards))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        scores(shared)
            .first()
            .map(u32::to_string)
            .ok_or_else(|| solve_failed("no board ever wins"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        scores(shared)
            .last()
            .map(u32::to_string)
            .ok_or_else(|| solve_failed("no board ever wins"))
    }
}
