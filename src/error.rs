//! Error types for queue operations.

use thiserror::Error;

/// Queue error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The allocator could not provide memory for a queue, an element or
    /// the copy of a value. Nothing was mutated.
    #[error("allocation failed for {0}")]
    AllocationFailure(&'static str),

    /// The operation needs an element that is not there.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Result type for queue operations
pub type Result<T> = core::result::Result<T, QueueError>;
