//! advent - run Advent of Code solutions against local puzzle inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Link advent-solutions so its solver plugins are collected
use advent_solutions as _;

use advent_solver::{SolverRegistry, SolverRegistryBuilder};
use aggregator::{ResultAggregator, ResultKey};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.log_level);

    let registry = build_registry(&config.tags)?;
    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = missing_inputs(&work_items, &config);
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for (year, day) in &missing {
            println!("  - {}", config.inputs.input_path(*year, *day).display());
        }
    }

    run_executor(executor, work_items, config.quiet)
}

/// `-v` raises the level; `RUST_LOG`, when set, wins
fn init_logging(level: log::LevelFilter) {
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Work items whose input file is absent
fn missing_inputs(work_items: &[WorkItem], config: &Config) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !config.inputs.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor on a background thread and print results in order
fn run_executor(executor: Executor, work_items: Vec<WorkItem>, quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });
    let mut aggregator = ResultAggregator::new(expected_keys);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();
    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        log::warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))??;

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry, keeping only solvers that carry every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter()
                .all(|tag| plugin.tags.iter().any(|t| *t == tag.trim()))
        })?
    };

    let registry = builder.build();
    log::debug!("{} solver(s) registered", registry.storage().len());
    Ok(registry)
}
