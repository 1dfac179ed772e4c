//! Comment-line filtering.
//!
//! Comments are recognized per line only: a line whose trimmed text starts
//! with one of the configured prefixes produces no tokens. A prefix appearing
//! after code on the same line is not a comment.

use tracing::debug;

use crate::Lexer;

/// The ordered set of comment prefixes for one scan.
///
/// Matching is a plain string-prefix test, so an empty prefix marks every
/// line as a comment.
///
/// # Example
///
/// ```
/// use linescan_lex::CommentPrefixes;
///
/// let comments = CommentPrefixes::new(["//", "#"]);
/// assert!(comments.matches("   // note"));
/// assert!(comments.matches("#!shebang"));
/// assert!(!comments.matches("x = 1 // trailing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPrefixes {
    prefixes: Vec<String>,
}

impl CommentPrefixes {
    /// Creates a prefix set, keeping the given order.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an empty set: no line is ever a comment.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if no prefix is configured.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterates over the prefixes in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// Returns true if `line`, trimmed of surrounding whitespace, starts with
    /// any configured prefix.
    pub fn matches(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for CommentPrefixes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> Lexer<'a> {
    /// Skips the current line if it is a comment line.
    ///
    /// Must only be called with the cursor at the start of a line entered by
    /// the line loop. Returns true if the line was skipped.
    pub(crate) fn skip_comment_line(&mut self) -> bool {
        if !self.comments.matches(self.cursor.current_line()) {
            return false;
        }

        debug!(line = self.cursor.line(), "skipping comment line");
        self.cursor.next_line();
        true
    }
}
