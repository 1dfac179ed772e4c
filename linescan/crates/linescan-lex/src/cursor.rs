//! Line and column cursor over the input.
//!
//! This module provides the `Cursor` struct, the scan state of one
//! tokenization: the input split into logical lines, the current line index
//! and the current column. Lines are split on `\n` only; a `\r` stays in the
//! line as an ordinary byte.

/// A cursor over the logical lines of an input text.
///
/// The column is a byte offset into the current line. The cursor only moves
/// forward: the column grows within a line and [`Cursor::next_line`] moves to
/// column 0 of the following line.
///
/// # Example
///
/// ```
/// use linescan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\ncd");
/// assert_eq!(cursor.current_byte(), Some(b'a'));
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), Some(b'b'));
/// cursor.next_line();
/// assert_eq!(cursor.line(), 1);
/// assert_eq!(cursor.current_byte(), Some(b'c'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// Logical lines of the input, without their line feeds.
    lines: Vec<&'a str>,

    /// Current line index (0-based).
    line: usize,

    /// Current column within the line (0-based, in bytes).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at line 0, column 0.
    ///
    /// An empty input still has one (empty) logical line, and an input ending
    /// in `\n` has an empty last line.
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.split('\n').collect(),
            line: 0,
            column: 0,
        }
    }

    /// Returns the number of logical lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true once the cursor has moved past the last line.
    pub fn is_at_end(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Returns true if the current line is the last one.
    pub fn is_last_line(&self) -> bool {
        self.line + 1 == self.lines.len()
    }

    /// Returns the text of the current line, or `""` past the end.
    pub fn current_line(&self) -> &'a str {
        self.lines.get(self.line).copied().unwrap_or("")
    }

    /// Returns true if every byte of the current line has been consumed.
    pub fn is_line_done(&self) -> bool {
        self.column >= self.current_line().len()
    }

    /// Returns the byte under the cursor, or `None` at end of line.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead on the current line.
    ///
    /// Lookahead never crosses a line boundary.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.current_line().as_bytes().get(self.column + offset).copied()
    }

    /// Advances one byte, clamped to the end of the line.
    ///
    /// On a multi-byte character the cursor moves past the whole character.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_bytes(1);
    }

    /// Advances `count` bytes, clamped to the end of the line.
    ///
    /// A target inside a multi-byte character is rounded up to the end of
    /// that character, so the column is always a character boundary.
    pub fn advance_bytes(&mut self, count: usize) {
        let line = self.current_line();
        let mut column = self.column.saturating_add(count).min(line.len());
        while !line.is_char_boundary(column) {
            column += 1;
        }
        self.column = column;
    }

    /// Advances past the whole character under the cursor.
    ///
    /// For ASCII this is one byte; a multi-byte UTF-8 character is skipped
    /// in one step so slices taken afterwards stay on character boundaries.
    pub fn advance_char(&mut self) {
        let width = self.current_line()[self.column..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.advance_bytes(width);
    }

    /// Advances while `predicate` holds for the current byte.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current_byte() {
            if !predicate(b) {
                break;
            }
            self.advance();
        }
    }

    /// Advances to the first `needle` byte on the current line, or to the end
    /// of the line. Returns true if `needle` was found; the cursor is then on it.
    pub fn seek_byte(&mut self, needle: u8) -> bool {
        match self.current_line().as_bytes()[self.column..]
            .iter()
            .position(|&b| b == needle)
        {
            Some(offset) => {
                self.column += offset;
                true
            }
            None => {
                self.column = self.current_line().len();
                false
            }
        }
    }

    /// Moves to column 0 of the next line.
    pub fn next_line(&mut self) {
        if !self.is_at_end() {
            self.line += 1;
        }
        self.column = 0;
    }

    /// Returns the current line index (0-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the current column (0-based byte offset).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the current line from column `start` to the cursor.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the cursor or not a column the cursor has
    /// stopped at on this line.
    ///
    /// # Example
    ///
    /// ```
    /// use linescan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// cursor.advance_bytes(3);
    /// assert_eq!(cursor.slice_from(0), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.current_line()[start..self.column]
    }

    /// Returns the rest of the current line from the cursor.
    pub fn remaining(&self) -> &'a str {
        &self.current_line()[self.column..]
    }
}
