//! Top-down merge sort.
//!
//! Splits `[start, end)` at `start + (end - start) / 2`, sorts both halves,
//! then merges them through the assigner. Never swaps. A sequence of length
//! n >= 1 goes through exactly n-1 merges, each followed by one observation.

use super::Sorter;
use crate::observer::Observer;
use crate::primitives::Assigner;
use crate::primitives::Comparator;

pub struct MergeSorter<'a> {
    comparator: &'a dyn Comparator,
    assigner: &'a dyn Assigner,
    observer: &'a dyn Observer,
}

impl<'a> MergeSorter<'a> {
    pub fn new(
        comparator: &'a dyn Comparator,
        assigner: &'a dyn Assigner,
        observer: &'a dyn Observer,
    ) -> MergeSorter<'a> {
        return MergeSorter { comparator, assigner, observer };
    }

    fn sort_range(&self, sequence: &mut [i64], start: usize, end: usize) {
        if end - start < 2 {
            return;
        }

        let mid = start + (end - start) / 2;
        self.sort_range(sequence, start, mid);
        self.sort_range(sequence, mid, end);
        merge(&mut sequence[start..end], mid - start, self.comparator, self.assigner);
        self.observer.observe(sequence);
    }
}

impl Sorter for MergeSorter<'_> {
    fn sort(&self, sequence: &mut [i64]) {
        self.observer.observe(sequence);
        self.sort_range(sequence, 0, sequence.len());
    }
}

/// Merge the sorted runs `run[..mid]` and `run[mid..]` in place.
///
/// The left run is copied out first. The write cursor never passes the
/// right cursor, so unconsumed right values are never overwritten. When the
/// left run empties first the rest of the right run is already in place and
/// costs nothing.
pub(crate) fn merge(run: &mut [i64], mid: usize, comparator: &dyn Comparator, assigner: &dyn Assigner) {
    let left = run[..mid].to_vec();
    let mut l = 0;
    let mut r = mid;
    let mut out = 0;

    while l < left.len() && r < run.len() {
        let candidate = run[r];
        if comparator.compare(left[l], candidate) {
            assigner.assign(&mut run[out], left[l]);
            l += 1;
        } else {
            assigner.assign(&mut run[out], candidate);
            r += 1;
        }
        out += 1;
    }

    for &value in &left[l..] {
        assigner.assign(&mut run[out], value);
        out += 1;
    }
}
