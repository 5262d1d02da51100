//! Error types for the streak heuristic

use thiserror::Error;

/// Errors raised when the heuristic is handed input it cannot work with.
///
/// Everything else (full columns, empty candidate lists) is handled by
/// falling back to a centered move rather than failing.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("board has no columns")]
    EmptyBoard,

    #[error("board has no rows")]
    NoRows,

    #[error("ragged board: column {column} has {got} rows, expected {expected}")]
    RaggedBoard {
        column: usize,
        expected: usize,
        got: usize,
    },

    #[error("board is {got:?} (cols, rows) but the grid was built as {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
