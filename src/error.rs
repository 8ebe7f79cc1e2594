//! Error types for the boggler library.
//!
//! All fallible operations return [`Result`], with [`BogglerError`] covering
//! lexicon loading, board validation, search configuration, and worker
//! synchronization failures.

use std::io;

use thiserror::Error;

/// The main error type for boggler operations.
#[derive(Error, Debug)]
pub enum BogglerError {
    /// I/O errors (reading lexicon files, seed files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A lexicon part file is truncated, missing, or size-mismatched.
    /// Fatal at load time; the graph is never partially constructed.
    #[error("corrupt lexicon: {0}")]
    CorruptLexicon(String),

    /// A board string is malformed or contains a letter outside the
    /// lexicon character set.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Bad search parameters.
    #[error("configuration error: {0}")]
    Config(String),

    /// A mark table was handed off without having been received, or vice
    /// versa. Continuing would silently break word dedup, so this is fatal.
    #[error("mark handoff violation: {0}")]
    MarkHandoff(String),

    /// JSON serialization failures in CLI output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BogglerError {
    /// Create a corrupt-lexicon error.
    pub fn corrupt_lexicon<S: Into<String>>(message: S) -> Self {
        BogglerError::CorruptLexicon(message.into())
    }

    /// Create an invalid-board error.
    pub fn invalid_board<S: Into<String>>(message: S) -> Self {
        BogglerError::InvalidBoard(message.into())
    }

    /// Create a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        BogglerError::Config(message.into())
    }

    /// Create a mark-handoff error.
    pub fn mark_handoff<S: Into<String>>(message: S) -> Self {
        BogglerError::MarkHandoff(message.into())
    }

    /// Create an internal error.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        BogglerError::Internal(message.into())
    }
}

/// A specialized Result type for boggler operations.
pub type Result<T> = std::result::Result<T, BogglerError>;
