//! Error types for scalar reduction
//!
//! Provides a unified error type for the crate. Failures surface as typed
//! errors to the embedding driver; nothing here logs, retries, or discards
//! a failure.

use thiserror::Error;

/// Core error type for reduction operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source read past the end of the underlying buffer
    #[error("index {index} out of bounds for source of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Moment accumulators built against different means were merged
    #[error("cannot merge central moments about mean {left} with moments about mean {right}")]
    MeanMismatch { left: f64, right: f64 },

    /// IO error from a source backed by external storage
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors from custom source implementations
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an out-of-range source read
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create an error for a merge of moments about different means
    pub fn mean_mismatch(left: f64, right: f64) -> Self {
        Self::MeanMismatch { left, right }
    }
}
