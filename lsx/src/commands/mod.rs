//! Command modules for the lsx CLI.
//!
//! Each subcommand lives in its own file and follows the pattern in
//! [`traits`]: an args struct, a handler implementing `Command`, and a
//! `run_*` entry point called from `main`.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs, CheckCommand};
pub use tokens::{run_tokens, TokensArgs, TokensCommand};
