//! Error types for bytestream operations.

use std::fmt;

/// Result type for bytestream operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur during byte-level decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
        }
    }
}

impl std::error::Error for ByteError {}
