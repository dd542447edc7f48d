// Copyright 2025 ParBench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fibonacci sequence generation.
//!
//! All variants use wrapping `u64` addition: values from F(94) upward wrap
//! around, identically in the serial and parallel paths.

use std::thread;

use tracing::debug;

use crate::partition::split_inclusive;

/// Naive doubly-recursive Fibonacci. Exponential; only for small `n`.
pub fn fibonacci_recursive(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci_recursive(n - 1).wrapping_add(fibonacci_recursive(n - 2))
}

/// Bottom-up dynamic-programming Fibonacci.
pub fn fibonacci_dynamic(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    let mut table = vec![0u64; n as usize + 1];
    table[1] = 1;
    for i in 2..table.len() {
        table[i] = table[i - 1].wrapping_add(table[i - 2]);
    }
    table[n as usize]
}

/// Compute F(start)..=F(end).
///
/// The table is always built from index 0, so every chunk is independent of
/// the others. Returns an empty vector when `start > end`.
pub fn fibonacci_chunk(start: u64, end: u64) -> Vec<u64> {
    if start > end {
        return Vec::new();
    }
    let mut table = vec![0u64; end as usize + 1];
    if end >= 1 {
        table[1] = 1;
    }
    for i in 2..table.len() {
        table[i] = table[i - 1].wrapping_add(table[i - 2]);
    }
    table.split_off(start as usize)
}

/// Compute the full sequence F(0)..=F(n) across `workers` threads.
///
/// `0..=n` is split into contiguous ranges, one per worker, and the chunks
/// are concatenated in index order once every worker has joined.
pub fn fibonacci_parallel(n: u64, workers: usize) -> Vec<u64> {
    let ranges = split_inclusive(0, n, workers);
    debug!(n, chunks = ranges.len(), "fibonacci fan-out");

    thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| scope.spawn(move || fibonacci_chunk(*range.start(), *range.end())))
            .collect();

        let mut sequence = Vec::with_capacity(n as usize + 1);
        for handle in handles {
            match handle.join() {
                Ok(chunk) => sequence.extend(chunk),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        sequence
    })
}
