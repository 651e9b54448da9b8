//! Sortscope - instrumented in-memory sorting.
//!
//! Five comparison sorts (selection, insertion, merge, fork/join merge and
//! quicksort) built on three counted primitives: compare, assign and swap.
//! An observer sees the sequence after every step, which makes the crate
//! useful for tracing, visualization, and checking operation counts against
//! each algorithm's known complexity.
//!
//! # Quick Start
//!
//! ```
//! use sortscope::observer::Recorder;
//! use sortscope::primitives::{Comparator, LessThan, SimpleAssigner, SimpleSwapper, Swapper};
//! use sortscope::registry;
//! use sortscope::Sorter;
//!
//! let comparator = LessThan::new();
//! let assigner = SimpleAssigner::new();
//! let swapper = SimpleSwapper::new();
//! let recorder = Recorder::new();
//!
//! let sorter = registry::resolve("selection", &comparator, &assigner, &swapper, &recorder).unwrap();
//! let mut list = vec![4, 2, 3, 1];
//! sorter.sort(&mut list);
//!
//! assert_eq!(list, vec![1, 2, 3, 4]);
//! assert_eq!(comparator.count(), 6);
//! assert_eq!(swapper.count(), 3);
//! assert_eq!(recorder.len(), 4);
//! ```

pub mod error;
pub mod observer;
pub mod permutation;
pub mod primitives;
pub mod registry;
pub mod sort;

pub use error::Error;
pub use sort::Sorter;
