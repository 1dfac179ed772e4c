//! Common types and utilities for lsx commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fmt;
use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{LsxError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for printing tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Returns the name used for `path` in diagnostics.
pub fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Reads the whole input named by `path`, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.exists() {
        return Err(LsxError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(LsxError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        LsxError::FileOperation(format!(
            "{} {}: {}",
            error_messages::INPUT_NOT_READABLE,
            path.display(),
            e
        ))
    })
}

// ============================================================================
// Comment Prefixes
// ============================================================================

/// Picks the comment prefixes for a run.
///
/// `--no-comments` wins, then prefixes given on the command line, then the
/// configured list.
pub fn resolve_prefixes(cli_prefixes: &[String], no_comments: bool, config: &Config) -> Vec<String> {
    if no_comments {
        Vec::new()
    } else if !cli_prefixes.is_empty() {
        cli_prefixes.to_vec()
    } else {
        config.comment_prefixes.clone()
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when input cannot be read as UTF-8 text.
    pub const INPUT_NOT_READABLE: &str = "Failed to read";

    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";
}
