//! Selection sort.
//!
//! Comparisons: exactly n(n-1)/2. Swaps: exactly n-1 for n >= 1, since the
//! minimum is swapped into place even when it is already there.

use super::Sorter;
use crate::observer::Observer;
use crate::primitives::Comparator;
use crate::primitives::Swapper;

pub struct SelectionSorter<'a> {
    comparator: &'a dyn Comparator,
    swapper: &'a dyn Swapper,
    observer: &'a dyn Observer,
}

impl<'a> SelectionSorter<'a> {
    pub fn new(
        comparator: &'a dyn Comparator,
        swapper: &'a dyn Swapper,
        observer: &'a dyn Observer,
    ) -> SelectionSorter<'a> {
        return SelectionSorter { comparator, swapper, observer };
    }
}

impl Sorter for SelectionSorter<'_> {
    fn sort(&self, sequence: &mut [i64]) {
        self.observer.observe(sequence);

        let len = sequence.len();
        for i in 0..len.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..len {
                if self.comparator.compare(sequence[j], sequence[min]) {
                    min = j;
                }
            }
            self.swapper.swap(sequence, i, min);
            self.observer.observe(sequence);
        }
    }
}
