//! Markdown output generation for benchmark results.
//!
//! This module renders collected result records as per-test timing tables
//! and a serial/parallel speedup table.

use crate::result::BenchmarkResults;
use std::fmt::Write;

/// Benchmarked algorithms, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Test {
    /// Fibonacci sequence generation.
    Fibonacci,
    /// Prime search.
    Primes,
    /// Quicksort.
    QuickSort,
}

/// Execution mode of a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single-threaded variant.
    Serial,
    /// Fan-out variant.
    Parallel,
}

impl Test {
    /// All tests in report order.
    pub const ALL: [Test; 3] = [Test::Fibonacci, Test::Primes, Test::QuickSort];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Test::Fibonacci => "Fibonacci",
            Test::Primes => "Primes",
            Test::QuickSort => "QuickSort",
        }
    }

    /// Time recorded for this test in `mode`, if the record has one.
    pub fn time(self, results: &BenchmarkResults, mode: Mode) -> Option<f64> {
        match (self, mode) {
            (Test::Fibonacci, Mode::Serial) => results.fibonacci_serial,
            (Test::Fibonacci, Mode::Parallel) => results.fibonacci_parallel,
            (Test::Primes, Mode::Serial) => results.primes_serial,
            (Test::Primes, Mode::Parallel) => results.primes_parallel,
            (Test::QuickSort, Mode::Serial) => results.sort_serial,
            (Test::QuickSort, Mode::Parallel) => results.sort_parallel,
        }
    }

    /// Whether `results` holds both the serial and the parallel time.
    pub fn is_recorded(self, results: &BenchmarkResults) -> bool {
        Mode::ALL.iter().all(|&mode| self.time(results, mode).is_some())
    }
}

impl Mode {
    /// Both modes in report order.
    pub const ALL: [Mode; 2] = [Mode::Serial, Mode::Parallel];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Serial => "Serial",
            Mode::Parallel => "Parallel",
        }
    }
}

/// Generate a markdown summary from result records.
pub fn generate_summary(results: &[BenchmarkResults]) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();

    for test in Test::ALL {
        let recorded: Vec<&BenchmarkResults> =
            results.iter().filter(|r| test.is_recorded(r)).collect();

        writeln!(output, "## {} Test", test.name()).unwrap();
        writeln!(output).unwrap();
        if recorded.is_empty() {
            writeln!(output, "No results recorded.").unwrap();
            writeln!(output).unwrap();
            continue;
        }

        for mode in Mode::ALL {
            // Every row in `recorded` has a time for both modes.
            let mut rows: Vec<(&BenchmarkResults, f64)> = recorded
                .iter()
                .filter_map(|&r| test.time(r, mode).map(|time| (r, time)))
                .collect();
            rows.sort_by(|a, b| a.1.total_cmp(&b.1));

            writeln!(output, "### {} Mode", mode.name()).unwrap();
            writeln!(output).unwrap();
            writeln!(output, "| Language | Time (s) | Workers |").unwrap();
            writeln!(output, "|----------|----------|---------|").unwrap();
            for (row, time) in rows {
                writeln!(
                    output,
                    "| {} | {:.6} | {} |",
                    row.language, time, row.process_count
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }
    }

    writeln!(output, "## Speedup Factors (Serial/Parallel)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Language | Workers | Fibonacci | Primes | QuickSort |").unwrap();
    writeln!(output, "|----------|---------|-----------|--------|-----------|").unwrap();
    for row in results {
        let speedups = row.speedups();
        writeln!(
            output,
            "| {} | {} | {} | {} | {} |",
            row.language,
            row.process_count,
            format_speedup(speedups.fibonacci),
            format_speedup(speedups.primes),
            format_speedup(speedups.sort)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "Total result files: {}", results.len()).unwrap();

    output
}

/// Render a speedup ratio as `2.50x`, or `n/a` when undefined.
pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(value) => format!("{value:.2}x"),
        None => "n/a".to_string(),
    }
}
