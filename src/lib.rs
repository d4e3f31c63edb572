#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

/// A position in the source text, captured for diagnostics only.
///
/// Grammar logic never compares locations; they exist so an error can point
/// at the exact character that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Full text of the line containing the position.
    pub line_text: String,
    /// Absolute character offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.line_text)?;
        writeln!(f, "{}^", " ".repeat(self.column - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn test_location_caret_rendering() {
        let location = Location {
            line_text: "def major (Num) = 18 >".to_string(),
            offset: 4,
            line: 1,
            column: 5,
        };

        assert_eq!(location.to_string(), "def major (Num) = 18 >\n    ^\n");
    }

    #[test]
    fn test_location_caret_at_first_column() {
        let location = Location {
            line_text: "oops".to_string(),
            offset: 0,
            line: 3,
            column: 1,
        };

        assert_eq!(location.to_string(), "oops\n^\n");
    }
}
