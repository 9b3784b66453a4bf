//! Property-based tests for the AocSolver derive macro
//!
//! The derive turns a set of `PartSolver<N>` impls into a `Solver` whose
//! `solve_part` dispatches by part number.

use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Depth readings: part 1 counts increases, part 2 reports the deepest reading
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct DepthSolver;

impl AocParser for DepthSolver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad depth: {l}")))
            })
            .collect()
    }
}

impl PartSolver<1> for DepthSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
    }
}

impl PartSolver<2> for DepthSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

fn to_input(depths: &[u32]) -> String {
    depths
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Part dispatch matches calling the `PartSolver` impl directly
mod part_dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_dispatches_to_correct_part_solver(
            depths in prop::collection::vec(0u32..10_000, 1..20),
            part in 1u8..=2
        ) {
            let input = to_input(&depths);
            let mut shared1 = <DepthSolver as AocParser>::parse(&input).unwrap();
            let mut shared2 = <DepthSolver as AocParser>::parse(&input).unwrap();

            let dispatched = <DepthSolver as Solver>::solve_part(&mut shared1, part);
            let direct = match part {
                1 => <DepthSolver as PartSolver<1>>::solve(&mut shared2),
                2 => <DepthSolver as PartSolver<2>>::solve(&mut shared2),
                _ => unreachable!(),
            };

            prop_assert_eq!(dispatched.unwrap(), direct.unwrap());
        }
    }
}

/// Parts outside `1..=max_parts` are reported as not implemented
mod invalid_part_rejection {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
            let mut shared = <DepthSolver as AocParser>::parse("1\n2\n3").unwrap();

            match <DepthSolver as Solver>::solve_part(&mut shared, invalid_part) {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
                other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
            }
        }
    }
}

/// Mutations made by part 1 are visible to part 2
mod shared_mutation {
    use super::*;

    #[derive(Debug)]
    struct Crabs {
        positions: Vec<i64>,
        median: Option<i64>,
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct CrabSolver;

    impl AocParser for CrabSolver {
        type SharedData<'a> = Crabs;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let positions = input
                .trim()
                .split(',')
                .map(|v| {
                    v.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("bad position: {v}")))
                })
                .collect::<Result<Vec<i64>, _>>()?;
            Ok(Crabs {
                positions,
                median: None,
            })
        }
    }

    impl PartSolver<1> for CrabSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let mut sorted = shared.positions.clone();
            sorted.sort_unstable();
            let median = sorted[sorted.len() / 2];
            shared.median = Some(median);
            Ok(median.to_string())
        }
    }

    impl PartSolver<2> for CrabSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.median.map_or("unset".to_string(), |m| (m * 2).to_string()))
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn part_two_sees_part_one_state(positions in prop::collection::vec(0i64..2000, 1..30)) {
            let input = positions.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
            let mut shared = <CrabSolver as AocParser>::parse(&input).unwrap();

            let median: i64 = <CrabSolver as Solver>::solve_part(&mut shared, 1).unwrap().parse().unwrap();
            prop_assert_eq!(shared.median, Some(median));

            let doubled = <CrabSolver as Solver>::solve_part(&mut shared, 2).unwrap();
            prop_assert_eq!(doubled, (median * 2).to_string());
        }
    }

    #[test]
    fn part_two_without_part_one_sees_fresh_state() {
        let mut shared = <CrabSolver as AocParser>::parse("16,1,2,0,4,2,7,1,2,14").unwrap();
        let answer = <CrabSolver as Solver>::solve_part(&mut shared, 2).unwrap();
        assert_eq!(answer, "unset");
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<DepthSolver as Solver>::PARTS, 2);
}
