//! No Space Left On Device

use std::collections::HashMap;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["2022", "tree"])]
pub struct Solver;

const DISK_SIZE: u64 = 70_000_000;
const NEEDED_SPACE: u64 = 30_000_000;
const SMALL_DIR: u64 = 100_000;
const ROOT: &[&str] = &[];

/// Total size of every directory, keyed by its path components from `/`
#[derive(Debug)]
pub struct DirSizes<'a> {
    sizes: HashMap<Vec<&'a str>, u64>,
}

impl DirSizes<'_> {
    fn root(&self) -> u64 {
        self.sizes.get(ROOT).copied().unwrap_or(0)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = DirSizes<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut cwd: Vec<&str> = Vec::new();
        let mut sizes: HashMap<Vec<&str>, u64> = HashMap::from([(Vec::new(), 0)]);

        for (idx, line) in input.lines().enumerate() {
            let err = || ParseError::InvalidFormat(format!("(line {}) unexpected {line:?}", idx + 1));
            let words: Vec<&str> = line.split_whitespace().collect();
            match words.as_slice() {
                [] | ["$", "ls"] => {}
                ["$", "cd", "/"] => cwd.clear(),
                ["$", "cd", ".."] => {
                    cwd.pop().ok_or_else(err)?;
                }
                ["$", "cd", name] => {
                    cwd.push(*name);
                    sizes.entry(cwd.clone()).or_insert(0);
                }
                ["dir", name] => {
                    let mut path = cwd.clone();
                    path.push(*name);
                    sizes.entry(path).or_insert(0);
                }
                [size, _name] => {
                    let size: u64 = size.parse().map_err(|_| err())?;
                    // A file counts toward every enclosing directory
                    for depth in 0..=cwd.len() {
                        *sizes.entry(cwd[..depth].to_vec()).or_insert(0) += size;
                    }
                }
                _ => return Err(err()),
            }
        }

        let dirs = DirSizes { sizes };
        log::debug!("{} directories, {} bytes used", dirs.sizes.len(), dirs.root());
        Ok(dirs)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.sizes.values().filter(|&&s| s <= SMALL_DIR).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let free = DISK_SIZE.saturating_sub(shared.root());
        let to_free = NEEDED_SPACE.saturating_sub(free);
        shared
            .sizes
            .values()
            .copied()
            .filter(|&s| s >= to_free)
            .min()
            .map(|s| s.to_string())
            .ok_or_else(|| solve_failed(format!("no directory frees {to_free} bytes")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    const SAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_parts::<Solver>(SAMPLE), vec!["95437", "24933642"]);
    }

    #[test]
    fn test_directory_sizes() {
        let dirs = <Solver as AocParser>::parse(SAMPLE).unwrap();
        assert_eq!(dirs.root(), 48381165);
        assert_eq!(dirs.sizes[&vec!["a", "e"]], 584);
        assert_eq!(dirs.sizes[&vec!["a"]], 94853);
        assert_eq!(dirs.sizes[&vec!["d"]], 24933642);
    }

    #[test]
    fn test_listed_directories_count_even_if_unvisited() {
        let input = "$ cd /\n$ ls\ndir empty\n100 a.txt\n";
        let dirs = <Solver as AocParser>::parse(input).unwrap();
        assert_eq!(dirs.sizes[&vec!["empty"]], 0);
        // Nothing needs freeing, so the empty directory is enough
        assert_eq!(solve_parts::<Solver>(input), vec!["100", "0"]);
    }

    #[test]
    fn test_cd_above_root_fails() {
        assert!(<Solver as AocParser>::parse("$ cd /\n$ cd ..\n").is_err());
    }
}
