//! String literal lexing.
//!
//! This module handles quoted strings, which end with their line, and raw
//! backtick strings, which may run across line breaks. Neither processes
//! escape sequences; the literal keeps its delimiters.

use tracing::debug;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"` or `'` quoted string.
    ///
    /// Consumes up to and including the next `quote` on the same line. An
    /// unterminated string runs to the end of the line.
    pub(crate) fn lex_quoted_string(&mut self, quote: u8) -> &'a str {
        let start = self.cursor.column();
        self.cursor.advance();

        if self.cursor.seek_byte(quote) {
            self.cursor.advance();
        } else {
            debug!(line = self.cursor.line(), column = start, "unterminated quoted string");
        }

        self.cursor.slice_from(start)
    }

    /// Lexes a raw string delimited by backticks.
    ///
    /// The string may span lines: each line break crossed is kept as `\n` in
    /// the literal and moves the cursor to column 0 of the next line. The
    /// cursor is left just past the closing backtick. An unterminated raw
    /// string consumes the rest of the input.
    pub(crate) fn lex_raw_string(&mut self) -> String {
        let mut content = String::from("`");
        self.cursor.advance();

        loop {
            let from = self.cursor.column();
            if self.cursor.seek_byte(b'`') {
                self.cursor.advance();
                content.push_str(self.cursor.slice_from(from));
                return content;
            }

            content.push_str(self.cursor.slice_from(from));
            if self.cursor.is_last_line() {
                debug!(line = self.cursor.line(), "unterminated raw string");
                return content;
            }

            content.push('\n');
            self.cursor.next_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind, NO_COMMENTS};

    fn lex_tokens(source: &str) -> Vec<Token> {
        Lexer::new(source, NO_COMMENTS).generate_tokens()
    }

    #[test]
    fn test_double_quoted_string() {
        let tokens = lex_tokens(r#"s = "hello world";"#);
        assert_eq!(tokens[2].literal, r#""hello world""#);
        assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
        assert_eq!((tokens[2].start_column, tokens[2].end_column), (4, 17));
        assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_single_quoted_string() {
        let tokens = lex_tokens("'a' 'b'");
        assert_eq!(tokens[0].literal, "'a'");
        assert_eq!(tokens[1].literal, "'b'");
    }

    #[test]
    fn test_quotes_only_close_on_same_kind() {
        let tokens = lex_tokens(r#""it's" 'say "hi"'"#);
        assert_eq!(tokens[0].literal, r#""it's""#);
        assert_eq!(tokens[1].literal, r#"'say "hi"'"#);
    }

    #[test]
    fn test_empty_string() {
        let tokens = lex_tokens(r#""""#);
        assert_eq!(tokens[0], Token::new(r#""""#, 0, 2, 0));
    }

    #[test]
    fn test_unterminated_quote_stops_at_line_end() {
        let tokens = lex_tokens("\"open\nnext");
        assert_eq!(tokens[0].literal, "\"open");
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].end_line, 0);
        assert_eq!(tokens[1], Token::new("next", 0, 4, 1));
    }

    #[test]
    fn test_raw_string_single_line() {
        let tokens = lex_tokens("x = `raw \"text\"`;");
        assert_eq!(tokens[2].literal, "`raw \"text\"`");
        assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
        assert_eq!((tokens[2].start_column, tokens[2].end_column), (4, 16));
        assert_eq!(tokens[3].literal, ";");
    }

    #[test]
    fn test_raw_string_multiline() {
        let tokens = lex_tokens("`multi\nline`");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].literal, "`multi\nline`");
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].line, 0);
        assert_eq!(tokens[0].end_line, 1);
        assert_eq!((tokens[0].start_column, tokens[0].end_column), (0, 5));
        assert_eq!(tokens[1], Token::eof(2, 0));
    }

    #[test]
    fn test_scanning_resumes_after_raw_string() {
        let tokens = lex_tokens("a = `x\ny` + b\nc");
        let literals: Vec<_> = tokens.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, vec!["a", "=", "`x\ny`", "+", "b", "c", ""]);
        assert_eq!(tokens[3], Token::new("+", 3, 4, 1));
        assert_eq!(tokens[4], Token::new("b", 5, 6, 1));
        assert_eq!(tokens[5], Token::new("c", 0, 1, 2));
    }

    #[test]
    fn test_raw_string_spans_comment_like_lines() {
        let tokens = Lexer::new("`a\n// kept\nb`\n// gone\nz", &["//"]).generate_tokens();
        assert_eq!(tokens[0].literal, "`a\n// kept\nb`");
        assert_eq!(tokens[1], Token::new("z", 0, 1, 4));
    }

    #[test]
    fn test_raw_string_keeps_carriage_returns() {
        let tokens = lex_tokens("`a\r\nb`");
        assert_eq!(tokens[0].literal, "`a\r\nb`");
    }

    #[test]
    fn test_unterminated_raw_string_consumes_input() {
        let tokens = lex_tokens("x `never\nclosed\n");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].literal, "`never\nclosed\n");
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[1].line, 0);
        assert_eq!(tokens[1].end_line, 2);
        assert_eq!(tokens[2], Token::eof(3, 0));
    }

    #[test]
    fn test_lone_backtick() {
        let tokens = lex_tokens("`");
        assert_eq!(tokens[0], Token::new("`", 0, 1, 0));
        assert!(tokens[1].is_eof());
    }
}
