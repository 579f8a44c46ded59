//! Error types for the microsieve library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum SieveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid state description: {0}")]
    StateDescription(String),

    #[error("Column '{0}' not found in mapping header")]
    ColumnNotFound(String),

    #[error("Values in column '{0}' do not uniquely identify samples")]
    NonUniqueIdentifier(String),

    #[error("Duplicate sample ID '{0}'")]
    DuplicateSampleId(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, SieveError>;
