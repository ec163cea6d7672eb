//! Error types for linktasker.

use thiserror::Error;

/// Errors produced by linktasker operations.
#[derive(Debug, Error)]
pub enum LinkTaskerError {
    /// Storage file could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration could not be loaded or saved.
    #[error("config error: {0}")]
    Config(String),

    /// User input failed validation.
    #[error("{0}")]
    Validation(String),

    /// No task or link exists with the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON serialization or deserialization failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
