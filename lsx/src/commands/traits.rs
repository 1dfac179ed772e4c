//! Command trait and common types for the lsx CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to keep their structure consistent.

use crate::error::Result;

/// Standard command trait that all lsx commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone)]
pub struct CommandResult<T> {
    /// Whether the command succeeded.
    pub success: bool,

    /// The command output data.
    pub data: T,

    /// Number of inputs processed.
    pub items_processed: usize,

    /// Number of inputs that failed.
    pub items_failed: usize,

    /// Diagnostics collected during execution.
    pub warnings: Vec<String>,
}

impl<T> CommandResult<T> {
    /// Create a new successful command result.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            items_processed: 0,
            items_failed: 0,
            warnings: Vec::new(),
        }
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed. Any failure marks the result
    /// unsuccessful.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self.success = count == 0;
        self
    }

    /// Add warning messages.
    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_success() {
        let result = CommandResult::success(42);
        assert!(result.success);
        assert_eq!(result.data, 42);
        assert_eq!(result.items_processed, 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_command_result_with_methods() {
        let result = CommandResult::success(())
            .with_items_processed(10)
            .with_items_failed(2)
            .with_warnings(vec!["test warning".to_string()]);

        assert!(!result.success);
        assert_eq!(result.items_processed, 10);
        assert_eq!(result.items_failed, 2);
        assert_eq!(result.warnings, vec!["test warning"]);
    }

    #[test]
    fn test_zero_failures_stay_successful() {
        let result = CommandResult::success("ok").with_items_failed(0);
        assert!(result.success);
    }
}
