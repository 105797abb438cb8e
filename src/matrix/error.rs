//! Error types for matrix construction

use thiserror::Error;

/// Errors that can occur while building or parsing a matrix
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The matrix has no rows
    #[error("matrix is empty")]
    Empty,

    /// A row length differs from the number of rows
    #[error("matrix is not square: row {row} has {len} modules, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// An integer that does not name a known category
    #[error("invalid module value 0x{0:03x}")]
    InvalidModuleValue(u16),

    /// A token in a matrix dump that is not an integer
    #[error("invalid token '{token}' on line {line}")]
    InvalidToken { token: String, line: usize },

    /// A category name that is not known
    #[error("unknown module category '{0}'")]
    UnknownCategory(String),
}
