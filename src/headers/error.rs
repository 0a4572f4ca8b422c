//! Error types for the header containers.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised when reading from a header container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// The requested index is past the number of stored fields.
    #[error("Field index {index} out of range (count {count})")]
    OutOfRange { index: usize, count: usize },
}

/// Errors raised when a container cannot accept another field.
#[derive(Debug, Error)]
pub enum CapacityError {
    /// The container already holds its maximum number of fields.
    #[error("Field limit of {0} reached")]
    LimitReached(usize),

    /// Growing the backing storage failed.
    #[error("Cannot grow field storage: {0}")]
    Alloc(#[from] TryReserveError),
}
