use advent_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, SolverInstance,
};

/// Part 2 reuses the sorted copy computed by part 1
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct CaloriesSolver;

#[derive(Debug)]
struct Elves {
    totals: Vec<u64>,
    sorted_desc: Option<Vec<u64>>,
}

impl Elves {
    fn sorted(&mut self) -> &[u64] {
        self.sorted_desc.get_or_insert_with(|| {
            let mut sorted = self.totals.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            sorted
        })
    }
}

impl AocParser for CaloriesSolver {
    type SharedData<'a> = Elves;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let totals = input
            .split("\n\n")
            .map(|group| {
                group
                    .lines()
                    .map(|l| {
                        l.parse::<u64>()
                            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
                    })
                    .sum::<Result<u64, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Elves {
            totals,
            sorted_desc: None,
        })
    }
}

impl PartSolver<1> for CaloriesSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.sorted().first().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for CaloriesSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.sorted().iter().take(3).sum::<u64>().to_string())
    }
}

const INPUT: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000";

#[test]
fn test_parts_in_order() {
    let mut instance = SolverInstance::<CaloriesSolver>::new(2030, 3, INPUT).unwrap();
    assert!(instance.shared().sorted_desc.is_none());

    assert_eq!(instance.solve(1).unwrap().answer, "24000");
    assert!(instance.shared().sorted_desc.is_some());
    assert_eq!(instance.solve(2).unwrap().answer, "45000");
}

#[test]
fn test_part_two_alone() {
    let mut instance = SolverInstance::<CaloriesSolver>::new(2030, 3, INPUT).unwrap();
    assert_eq!(instance.solve(2).unwrap().answer, "45000");
}

#[test]
fn test_instance_metadata() {
    let mut instance = SolverInstance::<CaloriesSolver>::new(2030, 3, INPUT).unwrap();
    assert_eq!(instance.year(), 2030);
    assert_eq!(instance.day(), 3);
    assert_eq!(instance.parts(), 2);
    assert!(instance.parse_end() >= instance.parse_start());

    let result = instance.solve(1).unwrap();
    assert!(result.duration() >= chrono::TimeDelta::zero());
    assert!(matches!(
        instance.solve(3),
        Err(SolveError::PartOutOfRange(3))
    ));
}
