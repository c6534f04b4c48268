//! Errors for structural model operations.
//!
//! The plain structural operations ignore invalid arguments; the `try_*`
//! variants on [`IndexedChangeTracker`](super::IndexedChangeTracker) report
//! them with these errors instead.

use thiserror::Error;

/// A rejected structural operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The row count of an insert or remove was below one.
    #[error("row count must be at least 1, got {count}")]
    InvalidCount {
        /// The requested row count.
        count: isize,
    },

    /// The insert position lies outside `0..=len`.
    #[error("cannot insert at row {index} of a model with {len} rows")]
    InsertOutOfRange {
        /// The requested first row.
        index: isize,
        /// The row count at the time of the call.
        len: usize,
    },

    /// The removed range `index..index + count` does not fit inside `0..len`.
    #[error("cannot remove {count} rows at row {index} of a model with {len} rows")]
    RemoveOutOfRange {
        /// The requested first row.
        index: isize,
        /// The requested row count.
        count: isize,
        /// The row count at the time of the call.
        len: usize,
    },
}

/// Result type for structural model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
