//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the line loop and the
//! character dispatch that picks a literal extractor.

use tracing::{debug, trace};

use crate::ascii::{is_ident_start, is_operator, is_punctuation, is_quote, is_whitespace};
use crate::cursor::Cursor;
use crate::lexer::CommentPrefixes;
use crate::token::Token;

/// Line-oriented lexer.
///
/// The lexer owns the scan state of one input: a [`Cursor`] over the logical
/// lines and the comment prefixes. Lines are visited in order; a comment line
/// is skipped whole, any other line is cut into literals until its last byte
/// is consumed. After the last line a single end-of-input token is produced.
///
/// # Example
///
/// ```
/// use linescan_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x == 1", &["//"]);
/// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().literal, "==");
/// assert_eq!(lexer.next_token().kind, TokenKind::Integer);
/// assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
/// ```
pub struct Lexer<'a> {
    /// Line and column cursor.
    pub(crate) cursor: Cursor<'a>,

    /// Prefixes marking comment lines.
    pub(crate) comments: CommentPrefixes,

    /// Whether the cursor sits at the start of a line not yet comment-tested.
    at_line_start: bool,

    /// Whether the end-of-input token has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for `source` with the given comment prefixes.
    pub fn new<S: AsRef<str>>(source: &'a str, comment_prefixes: &[S]) -> Self {
        let comments = comment_prefixes
            .iter()
            .map(|prefix| prefix.as_ref().to_owned())
            .collect();
        Self::with_comments(source, comments)
    }

    /// Creates a new lexer with an already built prefix set.
    pub fn with_comments(source: &'a str, comments: CommentPrefixes) -> Self {
        Self {
            cursor: Cursor::new(source),
            comments,
            at_line_start: true,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted this returns the end-of-input token, and
    /// keeps returning it on every further call.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.cursor.is_at_end() {
                return self.end_of_input();
            }

            if self.at_line_start {
                self.at_line_start = false;
                if self.skip_comment_line() {
                    self.at_line_start = true;
                    continue;
                }
            }

            if self.cursor.is_line_done() {
                self.cursor.next_line();
                self.at_line_start = true;
                continue;
            }

            if let Some(token) = self.scan_literal() {
                trace!(%token, "token");
                return token;
            }
        }
    }

    /// Scans the whole input and returns every token, end-of-input included.
    pub fn generate_tokens(self) -> Vec<Token> {
        self.collect()
    }

    /// Consumes one literal at the cursor, or one whitespace byte.
    ///
    /// Returns `None` when only whitespace was consumed. The dispatch order
    /// matters: a `.` followed by a digit starts a number before punctuation
    /// is considered.
    fn scan_literal(&mut self) -> Option<Token> {
        let b = self.cursor.current_byte()?;

        if is_whitespace(b) {
            self.cursor.advance();
            return None;
        }

        let start = self.cursor.column();
        let line = self.cursor.line();

        if b == b'`' {
            let literal = self.lex_raw_string();
            return self.emit(&literal, start, line);
        }

        let literal = match b {
            b if is_quote(b) => self.lex_quoted_string(b),
            _ if self.at_number_start() => self.lex_number(),
            b if is_ident_start(b) => self.lex_identifier(),
            b if is_operator(b) => self.lex_operator(),
            b if is_punctuation(b) => self.lex_punctuation(),
            _ => self.lex_unknown(),
        };
        self.emit(literal, start, line)
    }

    /// Builds a token ending at the cursor, dropping literals made only of
    /// scanner whitespace.
    fn emit(&self, literal: &str, start: usize, line: usize) -> Option<Token> {
        if literal.bytes().all(is_whitespace) {
            return None;
        }

        Some(Token::new(literal, start, self.cursor.column(), line).ending_on(self.cursor.line()))
    }

    fn end_of_input(&mut self) -> Token {
        if !self.finished {
            self.finished = true;
            debug!(lines = self.cursor.line_count(), "end of input");
        }
        Token::eof(self.cursor.line(), self.cursor.column())
    }

    /// Returns the current line index (0-based).
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Returns the current column (0-based byte offset).
    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Returns the comment prefixes in use.
    pub fn comments(&self) -> &CommentPrefixes {
        &self.comments
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token including the end-of-input token, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}
