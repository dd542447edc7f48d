// Copyright 2025 ParBench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Prime search by trial division.

use std::sync::Mutex;
use std::thread;

use tracing::debug;

use crate::partition::split_inclusive;

/// Largest `r` with `r * r <= n`.
///
/// Starts from the float estimate and corrects it with integer checks, since
/// `f64` cannot represent every `u64` above 2^53.
pub fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r > 0 && r > n / r {
        r -= 1;
    }
    while n / (r + 1) > r {
        r += 1;
    }
    r
}

/// Trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..=isqrt(n)).all(|i| n % i != 0)
}

/// All primes in `2..=limit`, ascending.
pub fn find_primes_serial(limit: u64) -> Vec<u64> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}

/// All primes in `2..=limit`, searched by `workers` threads.
///
/// Each worker scans its own range into a local buffer, then appends the
/// buffer to the shared result under a single mutex. Chunk order in the
/// output follows lock acquisition, so only the set of primes is stable.
pub fn find_primes_parallel(limit: u64, workers: usize) -> Vec<u64> {
    let ranges = split_inclusive(2, limit, workers);
    debug!(limit, chunks = ranges.len(), "prime search fan-out");

    let primes = Mutex::new(Vec::new());
    thread::scope(|scope| {
        for range in ranges {
            let primes = &primes;
            scope.spawn(move || {
                let local: Vec<u64> = range.filter(|&n| is_prime(n)).collect();
                primes
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .extend(local);
            });
        }
    });

    primes
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_numbers() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_squares_and_large_prime() {
        assert!(!is_prime(49));
        assert!(!is_prime(97 * 97));
        assert!(is_prime(99_991));
    }

    #[test]
    fn test_isqrt_is_exact_near_u64_limits() {
        // Largest prime below 2^32; its square is far beyond f64 precision.
        let p: u64 = 4_294_967_291;
        assert_eq!(isqrt(p * p), p);
        assert_eq!(isqrt(p * p - 1), p - 1);
        assert_eq!(isqrt(p * p + 1), p);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
    }

    #[test]
    fn test_serial_count_up_to_100_000() {
        assert_eq!(find_primes_serial(100_000).len(), 9_592);
    }

    #[test]
    fn test_parallel_is_set_equal_to_serial() {
        let serial = find_primes_serial(20_000);
        for workers in [1, 2, 3, 7, 16] {
            let mut parallel = find_primes_parallel(20_000, workers);
            parallel.sort_unstable();
            assert_eq!(parallel, serial, "workers = {workers}");
        }
    }

    #[test]
    fn test_chunk_boundaries_are_not_skipped() {
        // With 2..=13 split four ways every boundary value must still be tested.
        let mut parallel = find_primes_parallel(13, 4);
        parallel.sort_unstable();
        assert_eq!(parallel, vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn test_limits_below_two() {
        assert!(find_primes_serial(0).is_empty());
        assert!(find_primes_serial(1).is_empty());
        assert!(find_primes_parallel(1, 4).is_empty());
        assert_eq!(find_primes_parallel(2, 4), vec![2]);
    }
}
