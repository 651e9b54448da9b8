//! Comparison sorts driven entirely through counted primitives.
//!
//! # Algorithms
//!
//! | Sorter | Uses | Observes after |
//! |--------|------|----------------|
//! | `SelectionSorter` | compare, swap | every swap |
//! | `InsertionSorter` | compare, swap | every swap |
//! | `MergeSorter` | compare, assign | every merge |
//! | `ParallelMergeSorter` | compare, assign | the final merge |
//! | `QuickSorter` | compare, swap | every swap |
//!
//! Every sorter also observes the untouched input once before it starts.
//! Sorters hold only references to their primitives and keep no state
//! between calls, so one instance can sort any number of sequences.

pub mod insertion;
pub mod merge;
pub mod parallel_merge;
pub mod quick;
pub mod selection;

pub use insertion::InsertionSorter;
pub use merge::MergeSorter;
pub use parallel_merge::ParallelMergeSorter;
pub use parallel_merge::DEFAULT_SEQUENTIAL_CUTOFF;
pub use quick::QuickSorter;
pub use selection::SelectionSorter;

/// Sorts a sequence of integers in place into non-decreasing order.
pub trait Sorter {
    fn sort(&self, sequence: &mut [i64]);
}
