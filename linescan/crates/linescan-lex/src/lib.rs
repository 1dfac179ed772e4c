//! linescan-lex - Line-oriented lexical scanner
//!
//! This crate turns source text into an ordered sequence of classified,
//! positioned tokens. Input is read line by line; lines whose trimmed text
//! starts with a configured comment prefix are skipped whole.
//!
//! # Example Usage
//!
//! ```
//! use linescan_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x = 5 + 10;\n// comment\ny = x * 2;", &["//"]);
//! let literals: Vec<_> = tokens.iter().map(|t| t.literal.as_str()).collect();
//! assert_eq!(literals, ["x", "=", "5", "+", "10", ";", "y", "=", "x", "*", "2", ";", ""]);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, literal classification
//! - [`lexer`] - Line loop, comment filter and literal extractors
//! - [`cursor`] - Line/column cursor over the input
//! - [`ascii`] - ASCII character classes
//!
//! # Token Categories
//!
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`
//! - **Numbers**: digits with at most one decimal point (`42`, `3.14`, `.5`)
//! - **Strings**: `"..."` and `'...'` within one line, `` `...` `` across lines
//! - **Operators**: `+ - * / % = == < > ! & | ^`
//! - **Punctuation**: `. , ; : ( ) { } [ ]`
//! - **Illegal**: any other character
//! - **EOF**: exactly one, always last
//!
//! Scanning never fails. Unrecognized input comes back as `Illegal` tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{CommentPrefixes, Lexer};
pub use token::{Token, TokenKind};

/// An empty comment-prefix list, for scanning without comment skipping.
pub const NO_COMMENTS: &[&str] = &[];

/// Scans `input` and returns its tokens, ending with one end-of-input token.
///
/// Lines whose trimmed text starts with any of `comment_prefixes` produce no
/// tokens. Pass [`NO_COMMENTS`] to disable comment skipping.
///
/// # Example
///
/// ```
/// use linescan_lex::{tokenize, TokenKind, NO_COMMENTS};
///
/// let tokens = tokenize("@", NO_COMMENTS);
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Illegal);
/// assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
/// ```
pub fn tokenize<S: AsRef<str>>(input: &str, comment_prefixes: &[S]) -> Vec<Token> {
    Lexer::new(input, comment_prefixes).generate_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.literal.as_str()).collect()
    }

    #[test]
    fn test_statements_with_comment_line() {
        let tokens = tokenize("x = 5 + 10;\n// comment\ny = x * 2;", &["//"]);
        assert_eq!(
            literals(&tokens),
            vec!["x", "=", "5", "+", "10", ";", "y", "=", "x", "*", "2", ";", ""]
        );
        assert!(tokens.iter().all(|t| t.line != 1));
        assert_eq!(tokens[6], Token::new("y", 0, 1, 2));
        assert_eq!(tokens[12], Token::eof(3, 0));
    }

    #[test]
    fn test_multiline_raw_string_program() {
        let tokens = tokenize("`multi\nline`", NO_COMMENTS);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].literal, "`multi\nline`");
        assert_eq!((tokens[0].line, tokens[0].end_line), (0, 1));
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_single_illegal_character() {
        let tokens = tokenize("@", NO_COMMENTS);
        assert_eq!(tokens, vec![Token::new("@", 0, 1, 0), Token::eof(1, 0)]);
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("", NO_COMMENTS);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        assert!(tokens[0].literal.is_empty());
    }

    #[test]
    fn test_owned_prefixes() {
        let prefixes = vec!["#".to_string()];
        let tokens = tokenize("# skip\nkeep", &prefixes);
        assert_eq!(literals(&tokens), vec!["keep", ""]);
    }

    #[test]
    fn test_function_like_program() {
        let source = r#"
# config loader
fn load(path, retries) {
    if retries > 0 & ok == 1 {
        return read(path, "utf8");
    }
    value = 3.5 % 2;
}
"#;
        let tokens = tokenize(source, &["#"]);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

        assert!(!kinds.contains(&TokenKind::Illegal));
        assert!(kinds.contains(&TokenKind::Equal));
        assert!(kinds.contains(&TokenKind::BitAnd));
        assert!(kinds.contains(&TokenKind::Percent));
        assert_eq!(
            tokens.iter().find(|t| t.kind == TokenKind::StringLiteral).map(|t| t.literal.as_str()),
            Some("\"utf8\"")
        );
        assert_eq!(tokens[0], Token::new("fn", 0, 2, 2));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::EndOfInput).count(), 1);
    }

    #[test]
    fn test_tokens_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Token>();
        assert_send_sync::<TokenKind>();
        assert_send_sync::<CommentPrefixes>();
    }

    #[test]
    fn test_concurrent_scans_are_independent() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let source = format!("v{i} = {i};");
                    tokenize(&source, NO_COMMENTS)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let tokens = handle.join().unwrap();
            assert_eq!(tokens[0].literal, format!("v{i}"));
            assert_eq!(tokens[2].literal, i.to_string());
        }
    }
}
