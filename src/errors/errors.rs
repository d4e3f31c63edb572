use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;
use crate::Location;

/// A syntax error: the first violation encountered, in token order.
///
/// There is exactly one of these per failed parse; nothing downstream
/// recovers or collects further diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    location: Location,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: Location) -> Self {
        ParseError { kind, location }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The bare message text, without the location rendering.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for ParseError {
    /// Renders the diagnostic as
    ///
    /// ```text
    /// <message> at line <line>
    ///
    /// <source-line-text>
    /// <column-1 spaces>^
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} at line {}", self.kind, self.location.line)?;
        writeln!(f)?;
        writeln!(f, "{}", self.location)
    }
}

/// The closed set of diagnostic messages the front end can produce.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("Unexpected character")]
    UnexpectedCharacter,
    #[error("Unexpected end of file")]
    UnexpectedEndOfFile,
    #[error("Expected a number after '.'")]
    ExpectedNumberAfterDot,
    #[error("Expected {expected} but found {found}")]
    TokenMismatch {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("Expected {0}")]
    Expected(String),
    #[error("Expected top level statement")]
    ExpectedTopLevelStatement,
    #[error("Expected term")]
    ExpectedTermName,
    #[error("Expected identifier")]
    ExpectedIdentifier,
    #[error("Expected a term")]
    ExpectedTerm,
    #[error("Expected a literal")]
    ExpectedLiteral,
}
