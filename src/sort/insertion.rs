//! Insertion sort by adjacent swaps.
//!
//! Each element walks left one position at a time while it compares less
//! than its neighbour. On sorted input this costs n-1 comparisons and no
//! swaps.

use super::Sorter;
use crate::observer::Observer;
use crate::primitives::Comparator;
use crate::primitives::Swapper;

pub struct InsertionSorter<'a> {
    comparator: &'a dyn Comparator,
    swapper: &'a dyn Swapper,
    observer: &'a dyn Observer,
}

impl<'a> InsertionSorter<'a> {
    pub fn new(
        comparator: &'a dyn Comparator,
        swapper: &'a dyn Swapper,
        observer: &'a dyn Observer,
    ) -> InsertionSorter<'a> {
        return InsertionSorter { comparator, swapper, observer };
    }
}

impl Sorter for InsertionSorter<'_> {
    fn sort(&self, sequence: &mut [i64]) {
        self.observer.observe(sequence);

        for i in 0..sequence.len() {
            let mut j = i;
            while j > 0 && self.comparator.compare(sequence[j], sequence[j - 1]) {
                self.swapper.swap(sequence, j, j - 1);
                self.observer.observe(sequence);
                j -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Recorder;
    use crate::primitives::{RecordingComparator, RecordingSwapper};

    #[test]
    fn walks_each_element_left() {
        let comparator = RecordingComparator::new();
        let swapper = RecordingSwapper::new();
        let recorder = Recorder::new();
        let mut list = [3, 1, 2];

        InsertionSorter::new(&comparator, &swapper, &recorder).sort(&mut list);

        assert_eq!(list, [1, 2, 3]);
        // The final comparison of each walk fails and triggers nothing.
        assert_eq!(comparator.calls(), vec![(1, 3), (2, 3), (2, 1)]);
        assert_eq!(swapper.calls(), vec![(1, 0), (2, 1)]);
        assert_eq!(
            recorder.snapshots(),
            vec![vec![3, 1, 2], vec![1, 3, 2], vec![1, 2, 3]]
        );
    }

    #[test]
    fn equal_neighbours_stay_put() {
        let comparator = RecordingComparator::new();
        let swapper = RecordingSwapper::new();
        let recorder = Recorder::new();
        let mut list = [4, 4, 4];

        InsertionSorter::new(&comparator, &swapper, &recorder).sort(&mut list);

        assert_eq!(comparator.count(), 2);
        assert_eq!(swapper.count(), 0);
        assert_eq!(recorder.len(), 1);
    }
}
