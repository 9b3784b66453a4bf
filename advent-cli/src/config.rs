//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::inputs::{expand_tilde, InputStore};
use log::LevelFilter;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Where puzzle inputs are read from
    pub inputs: InputStore,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
    /// Log level before `RUST_LOG` is applied
    pub log_level: LevelFilter,
}

impl Config {
    /// Validate CLI args and resolve paths and defaults
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.threads == Some(0) {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }
        if let Some(tag) = args.tags.iter().find(|t| t.trim().is_empty()) {
            return Err(CliError::Config(format!("empty tag in --tags: {tag:?}")));
        }

        let mut inputs = InputStore::new(expand_tilde(&args.input_dir));
        if let Some(file) = &args.input {
            let (Some(year), Some(day)) = (args.year, args.day) else {
                return Err(CliError::Config(
                    "--input needs both --year and --day".to_string(),
                ));
            };
            let file = expand_tilde(file);
            if !file.is_file() {
                return Err(CliError::Config(format!(
                    "input file {} does not exist",
                    file.display()
                )));
            }
            inputs = inputs.with_override(year, day, file);
        }

        let log_level = match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            inputs,
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            log_level,
        })
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
