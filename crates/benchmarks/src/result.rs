//! Benchmark result types.
//!
//! This module provides the flat results record written once per run,
//! one timing per algorithm and mode.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Language tag written by this harness.
pub const LANGUAGE: &str = "Rust";

/// Timings for one run of all benchmark pairs, in seconds.
///
/// Field names are the on-disk JSON keys shared with the other language
/// harnesses; `thread_count` is accepted as an alias when reading. A timing
/// missing from a file reads as `None` and is left out when written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResults {
    /// Language tag of the harness that produced the record.
    pub language: String,
    /// Effective worker count for the run.
    #[serde(alias = "thread_count")]
    pub process_count: usize,
    /// Dynamic-programming Fibonacci.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fibonacci_serial: Option<f64>,
    /// Chunked parallel Fibonacci.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fibonacci_parallel: Option<f64>,
    /// Serial prime search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primes_serial: Option<f64>,
    /// Parallel prime search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primes_parallel: Option<f64>,
    /// Serial quicksort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_serial: Option<f64>,
    /// Depth-capped parallel quicksort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_parallel: Option<f64>,
}

/// Serial-over-parallel time ratios for one record.
///
/// `None` when either time is missing, or the parallel time is zero or not
/// finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speedups {
    /// Fibonacci speedup.
    pub fibonacci: Option<f64>,
    /// Prime search speedup.
    pub primes: Option<f64>,
    /// Quicksort speedup.
    pub sort: Option<f64>,
}

impl BenchmarkResults {
    /// Create a record for this harness with no timings yet.
    pub fn new(process_count: usize) -> Self {
        Self {
            language: LANGUAGE.to_string(),
            process_count,
            fibonacci_serial: None,
            fibonacci_parallel: None,
            primes_serial: None,
            primes_parallel: None,
            sort_serial: None,
            sort_parallel: None,
        }
    }

    /// Serial / parallel ratios for each benchmark pair.
    pub fn speedups(&self) -> Speedups {
        Speedups {
            fibonacci: ratio(self.fibonacci_serial, self.fibonacci_parallel),
            primes: ratio(self.primes_serial, self.primes_parallel),
            sort: ratio(self.sort_serial, self.sort_parallel),
        }
    }
}

fn ratio(serial: Option<f64>, parallel: Option<f64>) -> Option<f64> {
    let (serial, parallel) = (serial?, parallel?);
    let r = serial / parallel;
    (parallel > 0.0 && r.is_finite()).then_some(r)
}

/// Convert an elapsed duration to the fractional seconds stored in results.
pub fn seconds(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64()
}
