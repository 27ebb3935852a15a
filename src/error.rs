//! Error types for grid parsing and solver configuration.

use thiserror::Error;

/// Errors reported before any search work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The grid is empty or its cell count is not a perfect square.
    #[error("invalid grid size: {len} cells is not a non-empty perfect square")]
    InvalidGridSize { len: usize },

    /// A cell holds something other than a letter or the blank marker.
    #[error("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCharacter { row: usize, col: usize, ch: char },

    /// Rejected solver options (zero minimum length, zero threads).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The dedicated rayon pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolveError>;
