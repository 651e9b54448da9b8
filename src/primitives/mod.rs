//! Counted primitive operations that every sorter is built from.
//!
//! A sorter never touches the sequence directly to order it. It asks a
//! [`Comparator`] whether one value precedes another, an [`Assigner`] to
//! write a value into a position, and a [`Swapper`] to exchange two
//! positions. Each primitive counts its own invocations, so the caller can
//! read back exactly how much work an algorithm did.
//!
//! # Primitives
//!
//! | Capability | Counting impl | Recording double |
//! |------------|---------------|------------------|
//! | `Comparator` | `LessThan` | `RecordingComparator` |
//! | `Assigner` | `SimpleAssigner` | `RecordingAssigner` |
//! | `Swapper` | `SimpleSwapper` | `RecordingSwapper` |
//!
//! All methods take `&self`. Counts live in atomics, so a single instance
//! can be shared by every branch of the concurrent merge sort.

use serde::Serialize;

pub mod assign;
pub mod compare;
pub mod recording;
pub mod swap;

// Re-exports for convenience
pub use assign::Assigner;
pub use assign::SimpleAssigner;
pub use compare::Comparator;
pub use compare::LessThan;
pub use recording::RecordingAssigner;
pub use recording::RecordingComparator;
pub use recording::RecordingSwapper;
pub use swap::SimpleSwapper;
pub use swap::Swapper;

/// The three operation counts read back after a sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub comparisons: usize,
    pub assignments: usize,
    pub swaps: usize,
}

impl Tally {
    /// Snapshot the current counts of three primitives.
    pub fn read(comparator: &dyn Comparator, assigner: &dyn Assigner, swapper: &dyn Swapper) -> Tally {
        return Tally {
            comparisons: comparator.count(),
            assignments: assigner.count(),
            swaps: swapper.count(),
        };
    }

    /// Total number of primitive operations.
    pub fn total(&self) -> usize {
        return self.comparisons + self.assignments + self.swaps;
    }
}
