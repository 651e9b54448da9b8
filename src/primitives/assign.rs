//! Assignment primitive, used by the merge family.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Writes a value into one position of the sequence.
pub trait Assigner: Sync {
    /// Perform `*destination = source`.
    fn assign(&self, destination: &mut i64, source: i64);

    /// Number of times `assign` has been called on this instance.
    fn count(&self) -> usize;
}

/// Plain assignment with an invocation counter.
#[derive(Debug, Default)]
pub struct SimpleAssigner {
    count: AtomicUsize,
}

impl SimpleAssigner {
    pub fn new() -> SimpleAssigner {
        return SimpleAssigner { count: AtomicUsize::new(0) };
    }
}

impl Assigner for SimpleAssigner {
    #[inline]
    fn assign(&self, destination: &mut i64, source: i64) {
        *destination = source;
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    fn count(&self) -> usize {
        return self.count.load(Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_copies_source() {
        let assigner = SimpleAssigner::new();
        for (destination, source) in [(0, 0), (0, 1), (1, 0), (42, 86), (86, 42)] {
            let mut slot = destination;
            assigner.assign(&mut slot, source);
            assert_eq!(slot, source);
        }
        assert_eq!(assigner.count(), 5);
    }

    #[test]
    fn count_starts_at_zero() {
        let assigner = SimpleAssigner::default();
        assert_eq!(assigner.count(), 0);

        let mut slot = 3;
        assigner.assign(&mut slot, 3);
        assert_eq!(assigner.count(), 1, "same-value writes still count");
    }
}
