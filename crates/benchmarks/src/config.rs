// Copyright 2025 ParBench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Run configuration.
//!
//! A [`BenchConfig`] is built once per run and handed to every benchmark;
//! the worker count is never held in global state.

use tracing::warn;

/// Default Fibonacci index.
pub const DEFAULT_FIB_N: u64 = 100_000;

/// Default inclusive upper bound for the prime search.
pub const DEFAULT_PRIME_LIMIT: u64 = 100_000;

/// Default number of elements to sort.
pub const DEFAULT_SORT_SIZE: usize = 1_000_000;

/// Default upper bound for random sort input values.
pub const DEFAULT_SORT_MAX_VALUE: u32 = 1_000_000;

/// Default recursion depth cap for the parallel quicksort.
pub const DEFAULT_SORT_DEPTH: u32 = 3;

/// Workload and fan-out for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Effective worker fan-out, always at least 1.
    pub workers: usize,
    /// Fibonacci index to compute.
    pub fib_n: u64,
    /// Inclusive upper bound for the prime search.
    pub prime_limit: u64,
    /// Number of random elements to sort.
    pub sort_size: usize,
    /// Sort input values are drawn from `1..=sort_max_value`.
    pub sort_max_value: u32,
    /// Levels of recursion the parallel quicksort forks before going serial.
    pub sort_depth: u32,
    /// Seed for the sort input; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            workers: available_workers(),
            fib_n: DEFAULT_FIB_N,
            prime_limit: DEFAULT_PRIME_LIMIT,
            sort_size: DEFAULT_SORT_SIZE,
            sort_max_value: DEFAULT_SORT_MAX_VALUE,
            sort_depth: DEFAULT_SORT_DEPTH,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Default workload with the worker count resolved from a raw CLI value.
    pub fn with_requested_workers(requested: Option<&str>) -> Self {
        Self {
            workers: resolve_workers(requested, available_workers()),
            ..Self::default()
        }
    }

    /// Override the worker count, clamped to at least 1.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}

/// Number of logical CPUs on this machine.
pub fn available_workers() -> usize {
    num_cpus::get().max(1)
}

/// Resolve the effective worker count from an optional raw argument.
///
/// A positive integer is capped at `available`. Anything else (absent,
/// zero, negative or unparsable) yields `available`; an unparsable value is
/// logged and otherwise ignored.
pub fn resolve_workers(requested: Option<&str>, available: usize) -> usize {
    let available = available.max(1);
    let Some(raw) = requested else {
        return available;
    };

    match raw.trim().parse::<i64>() {
        Ok(count) if count > 0 => usize::try_from(count).map_or(available, |c| c.min(available)),
        Ok(_) => available,
        Err(e) => {
            warn!(value = raw, error = %e, "ignoring invalid worker count");
            available
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_request_uses_all_cpus() {
        assert_eq!(resolve_workers(None, 8), 8);
    }

    #[test]
    fn test_request_is_capped_at_available() {
        assert_eq!(resolve_workers(Some("4"), 8), 4);
        assert_eq!(resolve_workers(Some("32"), 8), 8);
        assert_eq!(resolve_workers(Some(" 2 "), 8), 2);
    }

    #[test]
    fn test_non_positive_or_invalid_request_uses_all_cpus() {
        assert_eq!(resolve_workers(Some("0"), 6), 6);
        assert_eq!(resolve_workers(Some("-3"), 6), 6);
        assert_eq!(resolve_workers(Some("many"), 6), 6);
        assert_eq!(resolve_workers(Some(""), 6), 6);
    }

    #[test]
    fn test_zero_available_is_clamped() {
        assert_eq!(resolve_workers(None, 0), 1);
    }

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.fib_n, DEFAULT_FIB_N);
        assert_eq!(config.prime_limit, DEFAULT_PRIME_LIMIT);
        assert_eq!(config.sort_size, DEFAULT_SORT_SIZE);
        assert_eq!(config.sort_depth, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_with_requested_workers_and_override() {
        let config = BenchConfig::with_requested_workers(Some("1"));
        assert_eq!(config.workers, 1);
        assert_eq!(config.workers(0).workers, 1);
    }
}
