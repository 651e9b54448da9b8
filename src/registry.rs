//! Resolve an algorithm name to a sorter wired to caller-owned primitives.
//!
//! Names are case-sensitive and drawn from a fixed set:
//! `insertion`, `selection`, `merge`, `parallel_merge`, `quick`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::observer::Observer;
use crate::primitives::Assigner;
use crate::primitives::Comparator;
use crate::primitives::Swapper;
use crate::sort::InsertionSorter;
use crate::sort::MergeSorter;
use crate::sort::DEFAULT_SEQUENTIAL_CUTOFF;
use crate::sort::ParallelMergeSorter;
use crate::sort::QuickSorter;
use crate::sort::SelectionSorter;
use crate::sort::Sorter;

/// Every valid algorithm name, in the order of [`Algorithm::ALL`].
pub const NAMES: [&str; 5] = ["insertion", "selection", "merge", "parallel_merge", "quick"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Selection,
    Merge,
    ParallelMerge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::ParallelMerge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        return match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::ParallelMerge => "parallel_merge",
            Algorithm::Quick => "quick",
        };
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        return Algorithm::ALL.into_iter().find(|algorithm| algorithm.name() == name);
    }

    /// Whether the algorithm ever calls the assigner.
    pub fn uses_assigner(self) -> bool {
        return matches!(self, Algorithm::Merge | Algorithm::ParallelMerge);
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Algorithm, Error> {
        return Algorithm::from_name(name).ok_or_else(|| Error::UnknownAlgorithm { name: name.to_string() });
    }
}

/// Membership test against [`NAMES`].
pub fn is_valid_name(name: &str) -> bool {
    return Algorithm::from_name(name).is_some();
}

/// Build a sorter for an already parsed algorithm.
///
/// Insertion, selection and quick sort ignore `assigner`; the merge family
/// ignores `swapper`. `parallel_merge` gets [`DEFAULT_SEQUENTIAL_CUTOFF`].
pub fn build<'a>(
    algorithm: Algorithm,
    comparator: &'a dyn Comparator,
    assigner: &'a dyn Assigner,
    swapper: &'a dyn Swapper,
    observer: &'a dyn Observer,
) -> Box<dyn Sorter + 'a> {
    return build_with_cutoff(
        algorithm,
        DEFAULT_SEQUENTIAL_CUTOFF,
        comparator,
        assigner,
        swapper,
        observer,
    );
}

/// Like [`build`], with an explicit fork cutoff for `parallel_merge`.
/// Every other algorithm ignores `sequential_cutoff`.
pub fn build_with_cutoff<'a>(
    algorithm: Algorithm,
    sequential_cutoff: usize,
    comparator: &'a dyn Comparator,
    assigner: &'a dyn Assigner,
    swapper: &'a dyn Swapper,
    observer: &'a dyn Observer,
) -> Box<dyn Sorter + 'a> {
    return match algorithm {
        Algorithm::Insertion => Box::new(InsertionSorter::new(comparator, swapper, observer)),
        Algorithm::Selection => Box::new(SelectionSorter::new(comparator, swapper, observer)),
        Algorithm::Merge => Box::new(MergeSorter::new(comparator, assigner, observer)),
        Algorithm::ParallelMerge => Box::new(
            ParallelMergeSorter::new(comparator, assigner, observer).with_cutoff(sequential_cutoff),
        ),
        Algorithm::Quick => Box::new(QuickSorter::new(comparator, swapper, observer)),
    };
}

/// Look up `name` and build its sorter.
///
/// Returns [`Error::UnknownAlgorithm`] for any name outside [`NAMES`].
pub fn resolve<'a>(
    name: &str,
    comparator: &'a dyn Comparator,
    assigner: &'a dyn Assigner,
    swapper: &'a dyn Swapper,
    observer: &'a dyn Observer,
) -> Result<Box<dyn Sorter + 'a>, Error> {
    let algorithm = match name.parse::<Algorithm>() {
        Ok(algorithm) => algorithm,
        Err(err) => {
            tracing::debug!(name, "no sorter registered under this name");
            return Err(err);
        }
    };

    tracing::debug!(%algorithm, "resolved sorter");
    return Ok(build(algorithm, comparator, assigner, swapper, observer));
}
