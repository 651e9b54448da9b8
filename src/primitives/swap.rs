//! Swap primitive.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Exchanges the values at two positions of the sequence.
pub trait Swapper: Sync {
    /// Exchange `sequence[left]` and `sequence[right]`.
    ///
    /// Counted even when `left == right`.
    fn swap(&self, sequence: &mut [i64], left: usize, right: usize);

    /// Number of times `swap` has been called on this instance.
    fn count(&self) -> usize;
}

/// Slice swap with an invocation counter.
#[derive(Debug, Default)]
pub struct SimpleSwapper {
    count: AtomicUsize,
}

impl SimpleSwapper {
    pub fn new() -> SimpleSwapper {
        return SimpleSwapper { count: AtomicUsize::new(0) };
    }
}

impl Swapper for SimpleSwapper {
    #[inline]
    fn swap(&self, sequence: &mut [i64], left: usize, right: usize) {
        self.count.fetch_add(1, Ordering::Relaxed);
        sequence.swap(left, right);
    }

    fn count(&self) -> usize {
        return self.count.load(Ordering::Relaxed);
    }
}
