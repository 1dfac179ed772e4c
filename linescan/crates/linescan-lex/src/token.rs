//! Token definitions and literal classification.
//!
//! A [`Token`] is an immutable record of one literal cut out of the input,
//! its [`TokenKind`] and where it was found. Positions are 0-based; columns
//! are byte offsets into the line the token started on.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::ascii::{is_digit, is_ident_start, is_string_delimiter};

/// The closed set of token kinds the scanner produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    /// A character or literal the scanner does not recognize.
    Illegal,
    /// End of input. Always the last token, and only once.
    EndOfInput,

    // Literals
    /// Identifier: letter or `_` followed by letters, digits, `_`.
    Identifier,
    /// Numeric literal, with or without a fractional part.
    Integer,
    /// Quoted (`"`, `'`) or raw (backtick) string, delimiters included.
    StringLiteral,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `==`
    Equal,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `!`
    Bang,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,

    // Punctuation
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
}

impl TokenKind {
    /// Every operator and punctuation kind, in declaration order.
    pub const SYMBOLS: [TokenKind; 23] = [
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Equal,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::Bang,
        TokenKind::BitAnd,
        TokenKind::BitOr,
        TokenKind::BitXor,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
    ];

    /// Looks a literal up in the operator/punctuation table.
    ///
    /// Only exact matches count: `"=="` is [`TokenKind::Equal`], `"=="` with
    /// trailing text is not a symbol at all.
    ///
    /// # Example
    ///
    /// ```
    /// use linescan_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_symbol("=="), Some(TokenKind::Equal));
    /// assert_eq!(TokenKind::from_symbol("!="), None);
    /// ```
    pub fn from_symbol(literal: &str) -> Option<TokenKind> {
        let kind = match literal {
            "=" => TokenKind::Assign,
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Asterisk,
            "/" => TokenKind::Slash,
            "%" => TokenKind::Percent,
            "==" => TokenKind::Equal,
            "<" => TokenKind::LessThan,
            ">" => TokenKind::GreaterThan,
            "!" => TokenKind::Bang,
            "&" => TokenKind::BitAnd,
            "|" => TokenKind::BitOr,
            "^" => TokenKind::BitXor,
            "." => TokenKind::Dot,
            "," => TokenKind::Comma,
            ";" => TokenKind::Semicolon,
            ":" => TokenKind::Colon,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            "[" => TokenKind::LBracket,
            "]" => TokenKind::RBracket,
            _ => return None,
        };
        Some(kind)
    }

    /// Classifies an extracted literal.
    ///
    /// Symbols are matched exactly. Anything else is classified from its
    /// first character only:
    ///
    /// - `"`, `'` or a backtick: [`TokenKind::StringLiteral`]
    /// - a digit, or `.` followed by a digit: [`TokenKind::Integer`]
    /// - a letter or `_`: [`TokenKind::Identifier`]
    /// - anything else, including the empty string: [`TokenKind::Illegal`]
    ///
    /// The rest of the literal is not re-validated; extraction already cut
    /// it on character-class boundaries.
    ///
    /// # Example
    ///
    /// ```
    /// use linescan_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::classify("foo_1"), TokenKind::Identifier);
    /// assert_eq!(TokenKind::classify("3.14"), TokenKind::Integer);
    /// assert_eq!(TokenKind::classify(".5"), TokenKind::Integer);
    /// assert_eq!(TokenKind::classify("`raw`"), TokenKind::StringLiteral);
    /// assert_eq!(TokenKind::classify("@"), TokenKind::Illegal);
    /// ```
    pub fn classify(literal: &str) -> TokenKind {
        if let Some(kind) = Self::from_symbol(literal) {
            return kind;
        }

        let bytes = literal.as_bytes();
        match bytes.first() {
            Some(&b) if is_string_delimiter(b) => TokenKind::StringLiteral,
            Some(&b) if is_digit(b) => TokenKind::Integer,
            Some(b'.') if bytes.get(1).copied().is_some_and(is_digit) => TokenKind::Integer,
            Some(&b) if is_ident_start(b) => TokenKind::Identifier,
            _ => TokenKind::Illegal,
        }
    }

    /// Returns the source text of an operator or punctuation kind.
    pub fn symbol(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Equal => "==",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Bang => "!",
            TokenKind::BitAnd => "&",
            TokenKind::BitOr => "|",
            TokenKind::BitXor => "^",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Illegal
            | TokenKind::EndOfInput
            | TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::StringLiteral => return None,
        };
        Some(text)
    }

    /// Returns the upper-case name used in printed and serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Equal => "EQ",
            TokenKind::LessThan => "LT",
            TokenKind::GreaterThan => "GT",
            TokenKind::Bang => "BANG",
            TokenKind::BitAnd => "AND",
            TokenKind::BitOr => "OR",
            TokenKind::BitXor => "XOR",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
        }
    }

    /// Returns true for the single-character and `==` operator kinds.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Equal
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::Bang
                | TokenKind::BitAnd
                | TokenKind::BitOr
                | TokenKind::BitXor
        )
    }

    /// Returns true for punctuation kinds.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Dot
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified literal with its position in the input.
///
/// `start_column..end_column` is a half-open byte range. For every token
/// except a raw string spanning line breaks, both ends lie on `line` and
/// `end_line == line`. A multi-line raw string starts at
/// `(line, start_column)` and ends just past its closing backtick at
/// `(end_line, end_column)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// Kind derived from the literal.
    pub kind: TokenKind,
    /// Exact text consumed from the input.
    pub literal: String,
    /// Byte offset of the first character on `line`.
    pub start_column: usize,
    /// Byte offset one past the last character, on `end_line`.
    pub end_column: usize,
    /// Line the token starts on.
    pub line: usize,
    /// Line the token ends on.
    pub end_line: usize,
}

impl Token {
    /// Creates a single-line token, classifying `literal`.
    ///
    /// # Example
    ///
    /// ```
    /// use linescan_lex::{Token, TokenKind};
    ///
    /// let token = Token::new("abc", 4, 7, 1);
    /// assert_eq!(token.kind, TokenKind::Identifier);
    /// assert_eq!(token.end_line, 1);
    /// ```
    pub fn new(literal: impl Into<String>, start_column: usize, end_column: usize, line: usize) -> Self {
        let literal = literal.into();
        Self {
            kind: TokenKind::classify(&literal),
            literal,
            start_column,
            end_column,
            line,
            end_line: line,
        }
    }

    /// Moves the end of the token to `end_line`, keeping `end_column`.
    pub fn ending_on(mut self, end_line: usize) -> Self {
        self.end_line = end_line;
        self
    }

    /// Creates the terminal end-of-input token at `(line, column)`.
    pub fn eof(line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            literal: String::new(),
            start_column: column,
            end_column: column,
            line,
            end_line: line,
        }
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns true if the token spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.end_line > self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Literal: '{}', Start: {}, End: {}, Line: {}",
            self.kind, self.literal, self.start_column, self.end_column, self.line
        )
    }
}
