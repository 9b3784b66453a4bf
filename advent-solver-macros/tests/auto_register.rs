use advent_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, SolverError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2030, day = 1, tags = ["sum", "easy"])]
struct SumSolver;

impl AocParser for SumSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for SumSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Borrows words straight out of the input
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2030, day = 2, tags = ["strings"])]
struct LongestWordSolver;

impl AocParser for LongestWordSolver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(words)
    }
}

impl PartSolver<1> for LongestWordSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared
            .iter()
            .max_by_key(|w| w.len())
            .copied()
            .unwrap_or_default();
        Ok(longest.to_string())
    }
}

#[test]
fn test_all_plugins_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    assert!(registry.storage().contains(2030, 1));
    assert!(registry.storage().contains(2030, 2));
    assert_eq!(registry.storage().get_info(2030, 1).unwrap().parts, 2);
    assert_eq!(registry.storage().get_info(2030, 2).unwrap().parts, 1);

    let mut solver = registry.create_solver(2030, 1, "2\n3\n4").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "9");
    assert_eq!(solver.solve(2).unwrap().answer, "24");

    let mut solver = registry
        .create_solver(2030, 2, "the quick brownish fox")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "brownish");
}

#[test]
fn test_tag_filtering() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"strings"))
        .expect("Failed to register plugins")
        .build();

    assert!(!registry.storage().contains(2030, 1));
    assert!(registry.storage().contains(2030, 2));
    assert_eq!(registry.storage().len(), 1);
}

#[test]
fn test_registering_plugins_twice_is_duplicate() {
    let builder = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2030 && plugin.day == 1)
        .unwrap();
    let result = builder.register_solver_plugins(|plugin| plugin.year == 2030 && plugin.day == 1);
    assert!(matches!(
        result,
        Err(advent_solver::RegistrationError::DuplicateSolver(2030, 1))
    ));
}

#[test]
fn test_parse_failure_surfaces_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let result = registry.create_solver(2030, 2, "   \n");
    assert!(matches!(
        result,
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}
