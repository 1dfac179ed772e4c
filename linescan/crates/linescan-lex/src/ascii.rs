//! ASCII character classes used by the scanner.
//!
//! The scanner works on bytes and never looks at Unicode properties: every
//! class below is a fixed set of ASCII bytes. Non-ASCII bytes belong to no
//! class and end up in `Illegal` tokens.

/// Checks if a byte is scanner whitespace: space, tab, line feed or
/// carriage return.
///
/// # Example
///
/// ```
/// use linescan_lex::ascii::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(b'\r'));
/// assert!(!is_whitespace(0x0c)); // form feed is not scanner whitespace
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Checks if a byte is an ASCII letter (`a-z`, `A-Z`).
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if a byte is an ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte can start an identifier: a letter or `_`.
///
/// # Example
///
/// ```
/// use linescan_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    is_letter(b) || b == b'_'
}

/// Checks if a byte can continue an identifier: a letter, digit or `_`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    is_letter(b) || is_digit(b) || b == b'_'
}

/// Checks if a byte is one of the operator characters
/// `+ - * / % = < > ! & | ^`.
///
/// # Example
///
/// ```
/// use linescan_lex::ascii::is_operator;
///
/// assert!(is_operator(b'^'));
/// assert!(!is_operator(b'.'));
/// ```
#[inline]
pub fn is_operator(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'<' | b'>' | b'!' | b'&' | b'|' | b'^'
    )
}

/// Checks if a byte is one of the punctuation characters
/// `. , ; : ( ) { } [ ]`.
#[inline]
pub fn is_punctuation(b: u8) -> bool {
    matches!(
        b,
        b'.' | b',' | b';' | b':' | b'(' | b')' | b'{' | b'}' | b'[' | b']'
    )
}

/// Checks if a byte opens a single-line quoted string.
#[inline]
pub fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// Checks if a byte opens a string literal of any flavor, raw strings included.
#[inline]
pub fn is_string_delimiter(b: u8) -> bool {
    is_quote(b) || b == b'`'
}
