//! Comparison primitive.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Decides whether one value precedes another.
///
/// Every call to [`compare`](Comparator::compare) counts as exactly one
/// comparison, whatever the arguments.
pub trait Comparator: Sync {
    /// Returns true if `left` must come before `right`.
    fn compare(&self, left: i64, right: i64) -> bool;

    /// Number of times `compare` has been called on this instance.
    fn count(&self) -> usize;
}

/// Strict less-than ordering with an invocation counter.
#[derive(Debug, Default)]
pub struct LessThan {
    count: AtomicUsize,
}

impl LessThan {
    pub fn new() -> LessThan {
        return LessThan { count: AtomicUsize::new(0) };
    }
}

impl Comparator for LessThan {
    #[inline]
    fn compare(&self, left: i64, right: i64) -> bool {
        self.count.fetch_add(1, Ordering::Relaxed);
        return left < right;
    }

    fn count(&self) -> usize {
        return self.count.load(Ordering::Relaxed);
    }
}
