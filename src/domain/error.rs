use std::io;

use thiserror::Error;

/// Library-wide error type for opb operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A flag value did not name a member of its option set.
    #[error("Unknown {field} '{value}'. Expected one of: {expected}")]
    UnknownOption { field: String, value: String, expected: String },

    /// System clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// An interactive prompt could not be completed.
    #[error("{0}")]
    Interaction(String),

    /// JSON serialization failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
