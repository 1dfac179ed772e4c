//! Operator and punctuation lexing.
//!
//! Every operator is a single character except `==`. Characters outside all
//! known classes are consumed one at a time and become `Illegal` tokens.

use tracing::debug;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator.
    ///
    /// Handles: `+ - * / % = < > ! & | ^` and `==`.
    pub(crate) fn lex_operator(&mut self) -> &'a str {
        let start = self.cursor.column();
        if self.cursor.current_byte() == Some(b'=') && self.cursor.peek_byte(1) == Some(b'=') {
            self.cursor.advance_bytes(2);
        } else {
            self.cursor.advance();
        }
        self.cursor.slice_from(start)
    }

    /// Lexes one punctuation character.
    ///
    /// Handles: `. , ; : ( ) { } [ ]`.
    pub(crate) fn lex_punctuation(&mut self) -> &'a str {
        let start = self.cursor.column();
        self.cursor.advance();
        self.cursor.slice_from(start)
    }

    /// Lexes one character no other rule accepts.
    pub(crate) fn lex_unknown(&mut self) -> &'a str {
        let start = self.cursor.column();
        self.cursor.advance_char();
        let literal = self.cursor.slice_from(start);
        debug!(line = self.cursor.line(), column = start, literal, "illegal character");
        literal
    }
}
