//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Set on the first result of each parse
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: SolverError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// State shared by all worker threads
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: config.inputs.clone(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        log::debug!(
            "executing {} solver(s), parallelized by {:?}",
            work_items.len(),
            self.sync_executor_config.parallelize_by
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part-level parallelism happens inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_work_item(&work, tx, sync_executor_config).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Load the input for one year/day and solve its parts
///
/// A missing input or a parse failure is reported as an error result for
/// every requested part rather than aborting the run.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match sync_executor_config.inputs.read(work.year, work.day) {
        Ok(input) => input,
        Err(e) => {
            log::warn!("{e}");
            let message = e.to_string();
            for part in work.parts.clone() {
                let error = SolverError::ParseError(advent_solver::ParseError::MissingData(message.clone()));
                send(tx, SolverResult::failed(work.year, work.day, part, error))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_parts_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Parse once and solve each part in order on this thread
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_parse_failure(work, e, tx),
    };
    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(year, day, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

/// Solve each part on its own instance in parallel, emitting in part order
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                let mut result = solve_part(year, day, part, &mut *solver);
                result.parse_duration = Some(solver.parse_duration());
                result
            }
            Err(e) => SolverResult::failed(year, day, part, e),
        })
        .collect();
    results.sort_by_key(|r| r.part);
    results.into_iter().try_for_each(|r| send(tx, r))
}

/// Report a failed parse as an error for every requested part
fn send_parse_failure(
    work: &WorkItem,
    error: SolverError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    log::warn!("{}/{:02}: {error}", work.year, work.day);
    let message = error.to_string();
    let mut error = Some(error);
    for part in work.parts.clone() {
        // The first part carries the original error, the rest its message
        let error = error.take().unwrap_or_else(|| {
            SolverError::ParseError(advent_solver::ParseError::Other(message.clone()))
        });
        send(tx, SolverResult::failed(work.year, work.day, part, error))?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => SolverResult::failed(year, day, part, e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use advent_solver::{
        AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder,
        register_solver,
    };
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Totals;

    impl AocParser for Totals {
        type SharedData<'a> = Vec<u64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
                .collect()
        }
    }

    impl PartSolver<1> for Totals {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<u64>().to_string())
        }
    }

    impl PartSolver<2> for Totals {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().max().copied().unwrap_or(0).to_string())
        }
    }

    fn setup(files: &[(u16, u8, &str)], extra_args: &[&str]) -> (TempDir, Executor) {
        let temp = TempDir::new().unwrap();
        let mut builder = SolverRegistryBuilder::new();
        for &(year, day, content) in files {
            register_solver!(builder, Totals, year, day);
            if !content.is_empty() {
                let dir = temp.path().join(year.to_string());
                fs::create_dir_all(&dir).unwrap();
                fs::write(dir.join(format!("day{day:02}.txt")), content).unwrap();
            }
        }
        let dir = temp.path().to_str().unwrap().to_string();
        let args = Args::try_parse_from(
            ["advent", "--input-dir", &dir, "--threads", "2"]
                .into_iter()
                .chain(extra_args.iter().copied()),
        )
        .unwrap();
        let config = Config::from_args(args).unwrap();
        let executor = Executor::new(builder.build(), &config).unwrap();
        (temp, executor)
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn answers(results: &[SolverResult]) -> Vec<Option<&str>> {
        results.iter().map(|r| r.answer.as_deref().ok()).collect()
    }

    #[test]
    fn test_every_mode_gives_same_answers() {
        for mode in ["sequential", "year", "day", "part"] {
            let (_temp, executor) = setup(
                &[(2021, 1, "1\n2\n3\n"), (2021, 2, "10\n5\n"), (2022, 1, "7\n")],
                &["--parallelize-by", mode],
            );
            let results = run(&executor);
            assert_eq!(
                answers(&results),
                vec![Some("6"), Some("3"), Some("15"), Some("10"), Some("7"), Some("7")],
                "{mode}"
            );
        }
    }

    #[test]
    fn test_filters() {
        let (_temp, executor) = setup(
            &[(2021, 1, "1\n"), (2021, 2, "2\n"), (2022, 2, "3\n")],
            &["--day", "2", "--part", "2"],
        );
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|w| w.day == 2 && w.parts == (2..=2)));
    }

    #[test]
    fn test_missing_input_becomes_error_results() {
        let (_temp, executor) = setup(&[(2021, 1, "4\n"), (2021, 2, "")], &[]);
        let results = run(&executor);
        assert_eq!(answers(&results), vec![Some("4"), Some("4"), None, None]);
        assert!(results[2].answer.as_ref().unwrap_err().to_string().contains("day02.txt"));
    }

    #[test]
    fn test_parse_failure_reported_for_each_part() {
        let (_temp, executor) = setup(&[(2021, 1, "x\n")], &[]);
        let results = run(&executor);
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0].answer, Err(SolverError::ParseError(ParseError::InvalidFormat(_)))));
        assert!(results[1].answer.is_err());
    }

    #[test]
    fn test_parse_duration_reported_once_per_parse() {
        let (_temp, executor) = setup(&[(2021, 1, "1\n")], &["--parallelize-by", "sequential"]);
        let results = run(&executor);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }
}
