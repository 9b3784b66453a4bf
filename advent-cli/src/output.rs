//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Prints results as they are released by the aggregator
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {e}"),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print totals after all results; silent in quiet mode
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let summary = Summary::from_results(results);
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", summary.solved, summary.failed);
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed));
        if !elapsed.is_zero() {
            let compute_secs = (summary.parse_time + summary.solve_time)
                .num_microseconds()
                .unwrap_or(0) as f64
                / 1_000_000.0;
            println!("Speedup factor: {:.2}x", compute_secs / elapsed.as_secs_f64());
        }
    }
}

/// Counts and timings over successful results
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn from_results(results: &[SolverResult]) -> Self {
        let ok = || results.iter().filter(|r| r.answer.is_ok());
        let solved = ok().count();
        Self {
            solved,
            failed: results.len() - solved,
            parse_time: ok().filter_map(|r| r.parse_duration).sum(),
            solve_time: ok().map(|r| r.solve_duration).sum(),
        }
    }
}

/// `YYYY/DD Part N: answer (parse: …, solve: …)` or the error in its place
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d)
        .map(format_duration)
        .unwrap_or_else(|_| "N/A".to_string())
}
