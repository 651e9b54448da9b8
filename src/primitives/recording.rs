//! Recording doubles for behavior verification.
//!
//! Each double behaves like its counting counterpart and also remembers the
//! arguments of every call, in call order. Tests use them to assert not just
//! how many operations a sorter performed but which ones.

use parking_lot::Mutex;

use super::assign::Assigner;
use super::compare::Comparator;
use super::swap::Swapper;

/// Strict less-than comparator that logs `(left, right)` pairs.
#[derive(Debug, Default)]
pub struct RecordingComparator {
    calls: Mutex<Vec<(i64, i64)>>,
}

impl RecordingComparator {
    pub fn new() -> RecordingComparator {
        return RecordingComparator::default();
    }

    /// Every `(left, right)` pair compared so far.
    pub fn calls(&self) -> Vec<(i64, i64)> {
        return self.calls.lock().clone();
    }
}

impl Comparator for RecordingComparator {
    fn compare(&self, left: i64, right: i64) -> bool {
        self.calls.lock().push((left, right));
        return left < right;
    }

    fn count(&self) -> usize {
        return self.calls.lock().len();
    }
}

/// Assigner that logs every value written.
#[derive(Debug, Default)]
pub struct RecordingAssigner {
    writes: Mutex<Vec<i64>>,
}

impl RecordingAssigner {
    pub fn new() -> RecordingAssigner {
        return RecordingAssigner::default();
    }

    /// Every source value assigned so far.
    pub fn writes(&self) -> Vec<i64> {
        return self.writes.lock().clone();
    }
}

impl Assigner for RecordingAssigner {
    fn assign(&self, destination: &mut i64, source: i64) {
        *destination = source;
        self.writes.lock().push(source);
    }

    fn count(&self) -> usize {
        return self.writes.lock().len();
    }
}

/// Swapper that logs `(left, right)` position pairs.
#[derive(Debug, Default)]
pub struct RecordingSwapper {
    calls: Mutex<Vec<(usize, usize)>>,
}

impl RecordingSwapper {
    pub fn new() -> RecordingSwapper {
        return RecordingSwapper::default();
    }

    /// Every `(left, right)` position pair swapped so far.
    pub fn calls(&self) -> Vec<(usize, usize)> {
        return self.calls.lock().clone();
    }
}

impl Swapper for RecordingSwapper {
    fn swap(&self, sequence: &mut [i64], left: usize, right: usize) {
        self.calls.lock().push((left, right));
        sequence.swap(left, right);
    }

    fn count(&self) -> usize {
        return self.calls.lock().len();
    }
}
