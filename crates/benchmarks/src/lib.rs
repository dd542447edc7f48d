//! Serial versus parallel algorithm benchmarks.
//!
//! This crate times three textbook algorithms in a serial and a fan-out
//! variant and records the wall-clock seconds in one flat results record.
//!
//! # Quick Start
//!
//! ```no_run
//! use parbench_benchmarks::{run_all_benchmarks, BenchConfig};
//!
//! let config = BenchConfig::default().workers(4);
//! let report = run_all_benchmarks(&config);
//!
//! println!("sort speedup: {:?}", report.results.speedups().sort);
//! ```
//!
//! # Modules
//!
//! - [`fibonacci`], [`primes`], [`quicksort`] - the benchmarked algorithms
//! - [`partition`] - range splitting shared by the fan-out variants
//! - [`config`] - the per-run [`BenchConfig`]
//! - [`result`] - the [`BenchmarkResults`] record
//! - [`io`] - reading and writing results
//! - [`markdown`] - summary report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod fibonacci;
pub mod io;
pub mod markdown;
pub mod partition;
pub mod primes;
pub mod quicksort;
pub mod result;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use io::WriteOutcome;
pub use result::BenchmarkResults;

use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Side observations from a run, used for the console report.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// The timings record.
    pub results: BenchmarkResults,
    /// F(n) from the serial run.
    pub fibonacci_value: u64,
    /// Length of the sequence returned by the parallel run.
    pub fibonacci_sequence_len: usize,
    /// Primes found by the serial search.
    pub primes_found_serial: usize,
    /// Primes found by the parallel search.
    pub primes_found_parallel: usize,
    /// Whether every serial/parallel pair produced matching output.
    pub verified: bool,
}

/// A finished run together with where its results were written.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Timings and observations.
    pub report: RunReport,
    /// Results file location.
    pub write: WriteOutcome,
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let value = f();
    (value, result::seconds(start.elapsed()))
}

/// Run every benchmark pair in order: Fibonacci, primes, quicksort.
///
/// Each variant is timed on its own; input generation and the
/// serial/parallel cross-check are outside the timed sections.
pub fn run_all_benchmarks(config: &BenchConfig) -> RunReport {
    let workers = config.workers.max(1);
    let mut results = BenchmarkResults::new(workers);
    let mut verified = true;
    info!(workers, "starting benchmarks");

    let (fibonacci_value, secs) = timed(|| fibonacci::fibonacci_dynamic(config.fib_n));
    results.fibonacci_serial = Some(secs);
    let (sequence, secs) = timed(|| fibonacci::fibonacci_parallel(config.fib_n, workers));
    results.fibonacci_parallel = Some(secs);
    if sequence.last().copied() != Some(fibonacci_value) {
        warn!(n = config.fib_n, "parallel fibonacci disagrees with serial");
        verified = false;
    }
    info!(
        serial = ?results.fibonacci_serial,
        parallel = ?results.fibonacci_parallel,
        "fibonacci done"
    );

    let (serial_primes, secs) = timed(|| primes::find_primes_serial(config.prime_limit));
    results.primes_serial = Some(secs);
    let (mut parallel_primes, secs) =
        timed(|| primes::find_primes_parallel(config.prime_limit, workers));
    results.primes_parallel = Some(secs);
    parallel_primes.sort_unstable();
    if parallel_primes != serial_primes {
        warn!(limit = config.prime_limit, "parallel prime search disagrees with serial");
        verified = false;
    }
    info!(
        serial = ?results.primes_serial,
        parallel = ?results.primes_parallel,
        "primes done"
    );

    let mut serial_input =
        quicksort::random_input(config.sort_size, config.sort_max_value, config.seed);
    let mut parallel_input = serial_input.clone();
    let ((), secs) = timed(|| quicksort::quicksort_serial(&mut serial_input));
    results.sort_serial = Some(secs);
    let ((), secs) = timed(|| {
        quicksort::quicksort_parallel(&mut parallel_input, config.sort_depth, workers)
    });
    results.sort_parallel = Some(secs);
    if serial_input != parallel_input {
        warn!(size = config.sort_size, "parallel quicksort disagrees with serial");
        verified = false;
    }
    info!(
        serial = ?results.sort_serial,
        parallel = ?results.sort_parallel,
        "quicksort done"
    );

    RunReport {
        results,
        fibonacci_value,
        fibonacci_sequence_len: sequence.len(),
        primes_found_serial: serial_primes.len(),
        primes_found_parallel: parallel_primes.len(),
        verified,
    }
}

/// Run all benchmarks and write the results record.
///
/// The record goes to `logs_dir`, or to `fallback_dir` when that write
/// fails. Write failures are logged, never returned.
pub fn run_and_write_all(config: &BenchConfig, logs_dir: &Path, fallback_dir: &Path) -> RunOutcome {
    let report = run_all_benchmarks(config);
    let write = io::write_results(&report.results, logs_dir, fallback_dir);
    RunOutcome { report, write }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            workers: 3,
            fib_n: 90,
            prime_limit: 2_000,
            sort_size: 5_000,
            sort_max_value: 1_000,
            sort_depth: 2,
            seed: Some(1),
        }
    }

    #[test]
    fn test_run_all_benchmarks_small_workload() {
        let report = run_all_benchmarks(&small_config());
        assert!(report.verified);
        assert_eq!(report.results.language, "Rust");
        assert_eq!(report.results.process_count, 3);
        assert_eq!(report.fibonacci_value, fibonacci::fibonacci_dynamic(90));
        assert_eq!(report.fibonacci_sequence_len, 91);
        assert_eq!(report.primes_found_serial, 303);
        assert_eq!(report.primes_found_parallel, 303);
        assert!(report.results.sort_serial.is_some_and(|s| s >= 0.0));
        assert!(report.results.sort_parallel.is_some_and(|s| s >= 0.0));
    }

    #[test]
    fn test_run_and_write_all() {
        let tmp = tempfile::tempdir().unwrap();
        let logs = tmp.path().join("logs");
        let outcome = run_and_write_all(&small_config(), &logs, tmp.path());

        let path = logs.join(io::RESULTS_FILE);
        assert_eq!(outcome.write, WriteOutcome::Primary(path.clone()));
        let written = io::read_results_json(&path).unwrap();
        assert_eq!(written.language, "Rust");
        assert_eq!(written.process_count, 3);
        let written_sort = written.sort_serial.unwrap();
        let reported_sort = outcome.report.results.sort_serial.unwrap();
        assert!((written_sort - reported_sort).abs() < 1e-9);
    }
}
