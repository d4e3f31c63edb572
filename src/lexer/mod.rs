//! Lexical analysis module for the front end.
//!
//! This module contains the pull-based tokenizer that turns source text
//! into a stream of tokens, one per call. It handles:
//!
//! - Keywords, identifiers (alphanumeric and operator-style), literals
//! - Line comments and whitespace
//! - Line/column tracking for error reporting
//! - Lexical error cases (unterminated strings, malformed numbers)

pub mod lexer;
pub mod tokens;
