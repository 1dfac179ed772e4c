//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, line loop and character dispatch
//! - `comment` - Comment-line filtering
//! - `identifier` - Identifier runs
//! - `number` - Numeric literals
//! - `string` - Quoted and raw (backtick) strings
//! - `operator` - Operators, punctuation and unknown characters

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::comment::CommentPrefixes;
pub use self::core::Lexer;
