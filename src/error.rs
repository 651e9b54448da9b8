//! Errors surfaced by the registry.

use thiserror::Error;

use crate::registry::NAMES;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown sorting algorithm '{name}' (expected one of: {expected})", expected = NAMES.join(", "))]
    UnknownAlgorithm { name: String },
}
