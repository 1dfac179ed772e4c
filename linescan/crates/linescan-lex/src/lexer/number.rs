//! Number literal lexing.
//!
//! Numbers are runs of decimal digits with at most one decimal point. There
//! is no separate float kind: `42`, `3.14`, `.5` and `7.` all classify as
//! integers.

use crate::ascii::is_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Returns true if a number starts at the cursor: a digit, or a `.`
    /// immediately followed by a digit.
    pub(crate) fn at_number_start(&self) -> bool {
        match self.cursor.current_byte() {
            Some(b) if is_digit(b) => true,
            Some(b'.') => self.cursor.peek_byte(1).is_some_and(is_digit),
            _ => false,
        }
    }

    /// Lexes a number literal.
    ///
    /// A second decimal point ends the literal and is left for the next
    /// token, so `1.2.3` lexes as `1.2` followed by `.3`.
    pub(crate) fn lex_number(&mut self) -> &'a str {
        let start = self.cursor.column();
        let mut seen_dot = false;

        while let Some(b) = self.cursor.current_byte() {
            if b == b'.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !is_digit(b) {
                break;
            }
            self.cursor.advance();
        }

        self.cursor.slice_from(start)
    }
}
