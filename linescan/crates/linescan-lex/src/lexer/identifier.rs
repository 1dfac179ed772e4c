//! Identifier lexing.

use crate::ascii::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier: the maximal run of ASCII letters, digits and `_`
    /// starting at the cursor.
    ///
    /// There are no keywords; `if` and `true` are identifiers like any other.
    pub(crate) fn lex_identifier(&mut self) -> &'a str {
        let start = self.cursor.column();
        self.cursor.eat_while(is_ident_continue);
        self.cursor.slice_from(start)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind, NO_COMMENTS};

    fn lex_tokens(source: &str) -> Vec<Token> {
        Lexer::new(source, NO_COMMENTS).generate_tokens()
    }

    #[test]
    fn test_simple_identifier() {
        let tokens = lex_tokens("hello");
        assert_eq!(tokens[0], Token::new("hello", 0, 5, 0));
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let tokens = lex_tokens("_private snake_case var123 __");
        let literals: Vec<_> = tokens.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, vec!["_private", "snake_case", "var123", "__", ""]);
        assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_identifier_stops_at_punctuation() {
        let tokens = lex_tokens("obj.field[0]");
        let literals: Vec<_> = tokens.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, vec!["obj", ".", "field", "[", "0", "]", ""]);
    }

    #[test]
    fn test_identifier_stops_at_non_ascii() {
        let tokens = lex_tokens("caféx");
        assert_eq!(tokens[0], Token::new("caf", 0, 3, 0));
        assert_eq!(tokens[1].literal, "é");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!((tokens[1].start_column, tokens[1].end_column), (3, 5));
        assert_eq!(tokens[2], Token::new("x", 5, 6, 0));
    }

    #[test]
    fn test_very_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = lex_tokens(&name);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].literal, name);
        assert_eq!(tokens[0].end_column, 10_000);
    }

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_tokens(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
            prop_assert_eq!(&tokens[0].literal, &input);
        });
    }
}
