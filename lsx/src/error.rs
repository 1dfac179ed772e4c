//! Error handling module for the lsx CLI.
//!
//! Scanning itself never fails; these errors cover everything around it:
//! reading input, loading configuration and reporting illegal tokens.

use thiserror::Error;

/// Main error type for the lsx CLI application.
#[derive(Error, Debug)]
pub enum LsxError {
    /// Error when the configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command arguments or config values are invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when `check` finds illegal tokens.
    #[error("Found {count} illegal token(s)")]
    IllegalTokens {
        /// Number of illegal tokens across all inputs.
        count: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LsxError.
pub type Result<T> = std::result::Result<T, LsxError>;
