//! Error types for rotsort operations.
//!
//! Every failure in the transform pipeline is an input-contract violation
//! detected at the boundary of a public operation. Nothing here is transient:
//! the same input always produces the same error.

use std::io;
use thiserror::Error;

/// The main error type for rotsort operations.
#[derive(Debug, Error)]
pub enum RotsortError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument outside the accepted domain of an operation.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// The `first` index of a transform record does not name a row.
    #[error("Invalid first index {first} for block of {len} bytes")]
    InvalidFirstIndex {
        /// The rejected index.
        first: u32,
        /// Length of the transformed block.
        len: usize,
    },

    /// A framed block ended before its fixed-width header.
    #[error("Truncated frame: need {needed} bytes, have {available}")]
    TruncatedFrame {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Input is longer than the frame can describe.
    #[error("Input too large: {len} bytes exceeds maximum of {max}")]
    InputTooLarge {
        /// Actual input length.
        len: usize,
        /// Largest supported length.
        max: usize,
    },
}

/// Result type alias for rotsort operations.
pub type Result<T> = std::result::Result<T, RotsortError>;

impl RotsortError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid first index error.
    pub fn invalid_first(first: u32, len: usize) -> Self {
        Self::InvalidFirstIndex { first, len }
    }

    /// Create a truncated frame error.
    pub fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedFrame { needed, available }
    }

    /// Create an input too large error.
    pub fn too_large(len: usize, max: usize) -> Self {
        Self::InputTooLarge { len, max }
    }
}
