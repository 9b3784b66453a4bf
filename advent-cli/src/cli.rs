//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
    /// Parallelize across all year/day/part combinations
    Part,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code solutions against local inputs", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Read the puzzle input from this file instead of the input directory
    #[arg(short, long, requires_all = ["year", "day"])]
    pub input: Option<PathBuf>,

    /// Directory holding inputs as `{year}/day{DD}.txt`
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["advent"]).unwrap();
        assert_eq!(args.year, None);
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_short_flags() {
        let args =
            Args::try_parse_from(["advent", "-y", "2021", "-d", "7", "-p", "2", "-t", "grid,bfs", "-vv"])
                .unwrap();
        assert_eq!(args.year, Some(2021));
        assert_eq!(args.day, Some(7));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["grid", "bfs"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_part_out_of_range_rejected() {
        assert!(Args::try_parse_from(["advent", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["advent", "--day", "26"]).is_err());
    }

    #[test]
    fn test_input_requires_year_and_day() {
        assert!(Args::try_parse_from(["advent", "-i", "day1.txt"]).is_err());
        assert!(Args::try_parse_from(["advent", "-i", "day1.txt", "-y", "2022"]).is_err());
        let args = Args::try_parse_from(["advent", "-i", "day1.txt", "-y", "2022", "-d", "1"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("day1.txt")));
    }
}
