//! Passage Pathing

use std::collections::HashMap;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::memo::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 12, tags = ["2021", "graph", "dp"])]
pub struct Solver;

/// Cave graph with caves numbered in order of first appearance
#[derive(Debug)]
pub struct Caves<'a> {
    names: Vec<&'a str>,
    small: Vec<bool>,
    links: Vec<Vec<usize>>,
    start: usize,
    end: usize,
}

impl<'a> Caves<'a> {
    fn id(&mut self, ids: &mut HashMap<&'a str, usize>, name: &'a str) -> usize {
        *ids.entry(name).or_insert_with(|| {
            self.names.push(name);
            self.small.push(name.chars().all(|c| c.is_ascii_lowercase()));
            self.links.push(Vec::new());
            self.names.len() - 1
        })
    }
}

/// Walk state: current cave, small caves already visited, and whether the
/// single repeat visit is still available
type Walk = (usize, u64, bool);

struct PathCount<'c, 'a> {
    caves: &'c Caves<'a>,
}

impl DpProblem<Walk, u64> for PathCount<'_, '_> {
    fn deps(&self, &(cave, visited, repeat_left): &Walk) -> Vec<Walk> {
        if cave == self.caves.end {
            return vec![];
        }
        self.caves.links[cave]
            .iter()
            .filter(|&&next| next != self.caves.start)
            .filter_map(|&next| {
                let bit = 1u64 << next;
                if !self.caves.small[next] {
                    Some((next, visited, repeat_left))
                } else if visited & bit == 0 {
                    Some((next, visited | bit, repeat_left))
                } else if repeat_left {
                    Some((next, visited, false))
                } else {
                    None
                }
            })
            .collect()
    }

    fn compute(&self, &(cave, _, _): &Walk, deps: Vec<u64>) -> u64 {
        if cave == self.caves.end {
            1
        } else {
            deps.iter().sum()
        }
    }
}

fn count_paths(caves: &Caves<'_>, allow_repeat: bool) -> u64 {
    let cache = DpCache::with_problem(HashMapBackend::new(), PathCount { caves });
    cache.get(&(caves.start, 1u64 << caves.start, allow_repeat))
}

impl AocParser for Solver {
    type SharedData<'a> = Caves<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut caves = Caves {
            names: Vec::new(),
            small: Vec::new(),
            links: Vec::new(),
            start: 0,
            end: 0,
        };
        let mut ids = HashMap::new();

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (a, b) = line.split_once('-').ok_or_else(|| {
                ParseError::InvalidFormat(format!("(line {}) expected 'a-b', got {line:?}", idx + 1))
            })?;
            let a = caves.id(&mut ids, a);
            let b = caves.id(&mut ids, b);
            if !caves.small[a] && !caves.small[b] {
                // Two adjacent big caves allow endless paths
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) big caves {} and {} are connected",
                    idx + 1,
                    caves.names[a],
                    caves.names[b]
                )));
            }
            caves.links[a].push(b);
            caves.links[b].push(a);
        }

        if caves.names.len() > 64 {
            return Err(ParseError::InvalidFormat(format!(
                "{} caves exceed the supported 64",
                caves.names.len()
            )));
        }
        caves.start = *ids
            .get("start")
            .ok_or_else(|| ParseError::MissingData("no 'start' cave".into()))?;
        caves.end = *ids
            .get("end")
            .ok_or_else(|| ParseError::MissingData("no 'end' cave".into()))?;
        log::debug!("parsed {} caves", caves.names.len());
        Ok(caves)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_paths(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_paths(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_parts;

    #[test]
    fn test_small_sample() {
        let input = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end\n";
        assert_eq!(solve_parts::<Solver>(input), vec!["10", "36"]);
    }

    #[test]
    fn test_medium_sample() {
        let input = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";
        assert_eq!(solve_parts::<Solver>(input), vec!["19", "103"]);
    }

    #[test]
    fn test_rejects_connected_big_caves() {
        assert!(<Solver as AocParser>::parse("start-A\nA-B\nB-end\n").is_err());
    }

    #[test]
    fn test_requires_start_and_end() {
        assert!(matches!(
            <Solver as AocParser>::parse("start-a\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
