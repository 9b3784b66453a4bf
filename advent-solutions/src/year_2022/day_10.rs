//! Cathode-Ray Tube

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{solve_failed, Grid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["2022", "simulation", "render"])]
pub struct Solver;

const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Noop,
    AddX(i64),
}

impl AocParser for Solver {
    /// Value of `X` during each cycle, starting with cycle 1
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut x = 1;
        let mut during = Vec::new();
        for (idx, line) in input.lines().enumerate() {
            let instruction = match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [] => continue,
                ["noop"] => Instruction::Noop,
                ["addx", v] => Instruction::AddX(v.parse().map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {e}", idx + 1))
                })?),
                _ => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) unknown instruction {line:?}",
                        idx + 1
                    )));
                }
            };
            match instruction {
                Instruction::Noop => during.push(x),
                Instruction::AddX(v) => {
                    during.extend([x, x]);
                    x += v;
                }
            }
        }
        log::trace!("program runs for {} cycles, X ends at {x}", during.len());
        Ok(during)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut strength = 0;
        for cycle in (20..=220).step_by(40) {
            let x = shared
                .get(cycle - 1)
                .ok_or_else(|| solve_failed(format!("program halts before cycle {cycle}")))?;
            strength += cycle as i64 * x;
        }
        Ok(strength.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cycles = SCREEN_WIDTH * SCREEN_HEIGHT;
        if shared.len() < cycles {
            return Err(solve_failed(format!(
                "program runs {} cycles, the screen needs {cycles}",
                shared.len()
            )));
        }
        let screen = Grid::from_fn(SCREEN_WIDTH, SCREEN_HEIGHT, |p| {
            let sprite = shared[p.y as usize * SCREEN_WIDTH + p.x as usize];
            if (sprite - p.x).abs() <= 1 { '#' } else { '.' }
        });
        Ok(format!("\n{screen}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop
";

    const SCREEN: &str = "
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["13140", SCREEN]);
    }

    #[test]
    fn test_register_timeline() {
        let during = <Solver as AocParser>::parse("noop\naddx 3\naddx -5\n").unwrap();
        assert_eq!(during, vec![1, 1, 1, 4, 4]);
    }

    #[test]
    fn test_short_program_fails() {
        let mut during = <Solver as AocParser>::parse("noop\n").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut during).is_err());
        assert!(<Solver as PartSolver<2>>::solve(&mut during).is_err());
    }
}
