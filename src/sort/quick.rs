//! Quicksort with Lomuto partitioning.
//!
//! The pivot is always the last element of the range. There is no pivot
//! randomization, so sorted and reverse-sorted inputs take O(n^2)
//! comparisons. Pending ranges live on a heap-allocated work stack, so
//! recursion depth never grows with the input.

use super::Sorter;
use crate::observer::Observer;
use crate::primitives::Comparator;
use crate::primitives::Swapper;

pub struct QuickSorter<'a> {
    comparator: &'a dyn Comparator,
    swapper: &'a dyn Swapper,
    observer: &'a dyn Observer,
}

impl<'a> QuickSorter<'a> {
    pub fn new(
        comparator: &'a dyn Comparator,
        swapper: &'a dyn Swapper,
        observer: &'a dyn Observer,
    ) -> QuickSorter<'a> {
        return QuickSorter { comparator, swapper, observer };
    }

    fn sort_range(&self, sequence: &mut [i64], start: usize, end: usize) {
        let mut pending = vec![(start, end)];

        while let Some((start, end)) = pending.pop() {
            if end - start < 2 {
                continue;
            }

            let pivot_index = self.partition(sequence, start, end);
            // Right first, so the left range is popped and sorted next.
            pending.push((pivot_index + 1, end));
            pending.push((start, pivot_index));
        }
    }

    /// Partition `[start, end)` around the value at `end - 1`.
    ///
    /// Returns the final position of the pivot. Everything before it compared
    /// less than the pivot; everything after it did not.
    pub(crate) fn partition(&self, sequence: &mut [i64], start: usize, end: usize) -> usize {
        let pivot = sequence[end - 1];
        let mut pivot_index = start;

        for i in start..end - 1 {
            if self.comparator.compare(sequence[i], pivot) {
                self.swapper.swap(sequence, i, pivot_index);
                self.observer.observe(sequence);
                pivot_index += 1;
            }
        }

        self.swapper.swap(sequence, pivot_index, end - 1);
        self.observer.observe(sequence);
        return pivot_index;
    }
}

impl Sorter for QuickSorter<'_> {
    fn sort(&self, sequence: &mut [i64]) {
        self.observer.observe(sequence);
        self.sort_range(sequence, 0, sequence.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Recorder;
    use crate::observer::Silent;
    use crate::primitives::{LessThan, RecordingComparator, RecordingSwapper};

    #[test]
    fn partition_places_pivot() {
        let comparator = LessThan::new();
        let swapper = RecordingSwapper::new();
        let recorder = Recorder::new();
        let sorter = QuickSorter::new(&comparator, &swapper, &recorder);
        let mut list = [3, 1, 5, 4, 2];

        let pivot_index = sorter.partition(&mut list, 0, 5);

        assert_eq!(pivot_index, 1);
        assert_eq!(list[pivot_index], 2);
        assert_eq!(list, [1, 2, 5, 4, 3]);
        assert_eq!(comparator.count(), 4);
        assert_eq!(swapper.calls(), vec![(1, 0), (1, 4)]);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn partition_with_smallest_pivot_leaves_left_empty() {
        let comparator = LessThan::new();
        let swapper = RecordingSwapper::new();
        let sorter = QuickSorter::new(&comparator, &swapper, &Silent);
        let mut list = [3, 2, 5, 4, 1];

        let pivot_index = sorter.partition(&mut list, 0, 5);

        assert_eq!(pivot_index, 0);
        assert_eq!(list[0], 1);
        let mut right = list[1..].to_vec();
        right.sort();
        assert_eq!(right, vec![2, 3, 4, 5]);
        assert_eq!(swapper.calls(), vec![(0, 4)]);
    }

    #[test]
    fn partition_respects_subrange() {
        let comparator = LessThan::new();
        let swapper = RecordingSwapper::new();
        let sorter = QuickSorter::new(&comparator, &swapper, &Silent);
        let mut list = [9, 4, 1, 3, 0];

        let pivot_index = sorter.partition(&mut list, 1, 4);

        assert_eq!(pivot_index, 2);
        assert_eq!(list, [9, 1, 3, 4, 0]);
    }

    #[test]
    fn sorts_with_duplicates() {
        let comparator = LessThan::new();
        let swapper = RecordingSwapper::new();
        let mut list = [2, 3, 2, 1, 3, 2];

        QuickSorter::new(&comparator, &swapper, &Silent).sort(&mut list);

        assert_eq!(list, [1, 2, 2, 2, 3, 3]);
    }

    #[test]
    fn left_range_is_sorted_before_right_range() {
        let comparator = RecordingComparator::new();
        let swapper = RecordingSwapper::new();
        let mut list = [2, 5, 1, 4, 3];

        QuickSorter::new(&comparator, &swapper, &Silent).sort(&mut list);

        assert_eq!(list, [1, 2, 3, 4, 5]);
        assert_eq!(
            comparator.calls(),
            vec![(2, 3), (5, 3), (1, 3), (4, 3), (2, 1), (4, 5)]
        );
        assert_eq!(swapper.calls(), vec![(0, 0), (2, 1), (2, 4), (0, 1), (3, 3), (4, 4)]);
    }
}
