//! Fork/join merge sort.
//!
//! Same splits and the same merge step as [`MergeSorter`](super::MergeSorter),
//! but the two halves of each range are sorted concurrently with
//! `rayon::join` before they are merged. The halves are disjoint sub-slices
//! from `split_at_mut`, so the sequence itself needs no lock; only the
//! primitives are shared, and they count with atomics.
//!
//! Ranges no longer than the sequential cutoff recurse on the current
//! thread. The rayon pool caps the number of threads regardless of input
//! size.
//!
//! # Observation
//!
//! A branch only ever borrows its own range, so the full sequence is
//! observed exactly twice: before sorting and after the last merge. Trace
//! consumers get a coarse trace here, with no intermediate merge states;
//! use [`MergeSorter`](super::MergeSorter) for a step-by-step trace.
//!
//! # Panics
//!
//! If a branch panics, the panic resurfaces in the parent once both
//! branches have finished. The sequence is left in an unspecified order.

use super::Sorter;
use super::merge::merge;
use crate::observer::Observer;
use crate::primitives::Assigner;
use crate::primitives::Comparator;

/// Ranges at most this long are not forked.
pub const DEFAULT_SEQUENTIAL_CUTOFF: usize = 1024;

pub struct ParallelMergeSorter<'a> {
    comparator: &'a dyn Comparator,
    assigner: &'a dyn Assigner,
    observer: &'a dyn Observer,
    sequential_cutoff: usize,
}

impl<'a> ParallelMergeSorter<'a> {
    pub fn new(
        comparator: &'a dyn Comparator,
        assigner: &'a dyn Assigner,
        observer: &'a dyn Observer,
    ) -> ParallelMergeSorter<'a> {
        return ParallelMergeSorter {
            comparator,
            assigner,
            observer,
            sequential_cutoff: DEFAULT_SEQUENTIAL_CUTOFF,
        };
    }

    /// Set the range length at or below which halves are sorted sequentially.
    /// Zero forks at every level.
    pub fn with_cutoff(mut self, sequential_cutoff: usize) -> ParallelMergeSorter<'a> {
        self.sequential_cutoff = sequential_cutoff;
        return self;
    }

    pub fn sequential_cutoff(&self) -> usize {
        return self.sequential_cutoff;
    }

    fn sort_range(&self, run: &mut [i64]) {
        let len = run.len();
        if len < 2 {
            return;
        }

        let mid = len / 2;
        {
            let (left, right) = run.split_at_mut(mid);
            if len <= self.sequential_cutoff {
                self.sort_range(left);
                self.sort_range(right);
            } else {
                tracing::trace!(len, "forking merge sort");
                rayon::join(|| self.sort_range(left), || self.sort_range(right));
            }
        }
        merge(run, mid, self.comparator, self.assigner);
    }
}

impl Sorter for ParallelMergeSorter<'_> {
    fn sort(&self, sequence: &mut [i64]) {
        self.observer.observe(sequence);
        if sequence.len() < 2 {
            return;
        }

        self.sort_range(sequence);
        self.observer.observe(sequence);
    }
}
