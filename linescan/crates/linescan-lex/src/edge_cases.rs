//! Edge case tests for linescan-lex
