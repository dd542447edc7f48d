// Copyright 2025 ParBench Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-place quicksort, serial and depth-capped parallel.
//!
//! Both variants use the last element as the pivot with a Lomuto partition,
//! so they do identical comparison work and differ only in fan-out.

use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Partition around the last element and return the pivot's final index.
///
/// Elements `<=` the pivot end up left of it, larger ones right of it.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if arr[i] <= arr[last] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}

/// Sort `arr` in place on the calling thread.
///
/// Recurses into the smaller side and iterates on the larger one, which
/// bounds stack depth by `log2(len)` even for already-sorted input.
pub fn quicksort_serial<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);
        let (left, rest) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quicksort_serial(left);
            arr = right;
        } else {
            quicksort_serial(right);
            arr = left;
        }
    }
}

/// Sort `arr` in place with at most `workers` threads sorting at once.
///
/// Each fork hands one partition to a new thread and splits the worker
/// budget between the two sides. Forking stops after `depth` levels or once
/// a side's budget drops to one worker; from there it sorts with
/// [`quicksort_serial`].
pub fn quicksort_parallel<T: Ord + Send>(arr: &mut [T], depth: u32, workers: usize) {
    if arr.len() <= 1 {
        return;
    }
    if depth == 0 || workers <= 1 {
        quicksort_serial(arr);
        return;
    }

    let pivot = partition(arr);
    let (left, rest) = arr.split_at_mut(pivot);
    let right = &mut rest[1..];
    let left_workers = workers / 2;
    let right_workers = workers - left_workers;

    thread::scope(|scope| {
        scope.spawn(move || quicksort_parallel(left, depth - 1, left_workers));
        quicksort_parallel(right, depth - 1, right_workers);
    });
}

/// Generate the sort benchmark input: `size` values drawn uniformly from
/// `1..=max_value`.
///
/// A fixed `seed` makes the input reproducible across runs.
pub fn random_input(size: usize, max_value: u32, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let max_value = max_value.max(1);
    (0..size).map(|_| rng.random_range(1..=max_value)).collect()
}
