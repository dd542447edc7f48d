// Copyright 2025 ParBench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Range partitioning for worker fan-out.
//!
//! Every parallel benchmark splits its index space with [`split_inclusive`],
//! so each worker owns one contiguous, disjoint slice of the input.

use std::ops::RangeInclusive;

/// Split `lo..=hi` into at most `parts` contiguous, non-empty ranges.
///
/// Range sizes differ by at most one, earlier ranges taking the remainder.
/// The ranges are returned in ascending order and cover `lo..=hi` exactly.
/// Returns an empty vector when `lo > hi`; `parts == 0` is treated as 1.
pub fn split_inclusive(lo: u64, hi: u64, parts: usize) -> Vec<RangeInclusive<u64>> {
    if lo > hi {
        return Vec::new();
    }

    // `hi - lo + 1` overflows only for the full u64 domain.
    let len = (hi - lo).saturating_add(1);
    let parts = (parts.max(1) as u64).min(len);
    let base = len / parts;
    let remainder = len % parts;

    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = lo;
    for i in 0..parts {
        let size = base + u64::from(i < remainder);
        let end = start + (size - 1);
        ranges.push(start..=end);
        start = end.wrapping_add(1);
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(ranges: &[RangeInclusive<u64>]) -> Vec<u64> {
        ranges.iter().flat_map(|r| r.clone()).collect()
    }

    #[test]
    fn test_split_covers_range_exactly() {
        let ranges = split_inclusive(2, 100, 7);
        assert_eq!(ranges.len(), 7);
        assert_eq!(flatten(&ranges), (2..=100).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_sizes_are_balanced() {
        let ranges = split_inclusive(0, 9, 4);
        let sizes: Vec<u64> = ranges.iter().map(|r| r.end() - r.start() + 1).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_more_parts_than_items() {
        let ranges = split_inclusive(5, 7, 16);
        assert_eq!(ranges, vec![5..=5, 6..=6, 7..=7]);
    }

    #[test]
    fn test_empty_and_degenerate_inputs() {
        assert!(split_inclusive(3, 2, 4).is_empty());
        assert_eq!(split_inclusive(4, 4, 0), vec![4..=4]);
        assert_eq!(split_inclusive(0, 10, 1), vec![0..=10]);
    }
}
