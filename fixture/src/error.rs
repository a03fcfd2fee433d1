//! Error types for fixture generation.

use std::fmt;
use std::io;

/// Result type for fixture generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur during fixture generation.
///
/// Configuration errors are raised before any byte is written; I/O errors
/// abort generation immediately and may leave a truncated file behind.
#[derive(Debug)]
pub enum GenerateError {
    /// The sample count must be positive.
    InvalidSampleCount,

    /// The record layout failed validation.
    Layout(layout::LayoutError),

    /// Opening, writing, or flushing the destination failed.
    Io(io::Error),
}

impl GenerateError {
    /// Returns `true` for configuration errors (as opposed to I/O faults).
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::InvalidSampleCount | Self::Layout(_))
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSampleCount => {
                write!(f, "sample count must be a positive integer")
            }
            Self::Layout(err) => {
                write!(f, "invalid record layout: {err}")
            }
            Self::Io(err) => {
                write!(f, "fixture output failed: {err}")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSampleCount => None,
            Self::Layout(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<layout::LayoutError> for GenerateError {
    fn from(err: layout::LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<io::Error> for GenerateError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
