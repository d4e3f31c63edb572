use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("type", Token::Type);
        map.insert("def", Token::Def);
        map.insert("match", Token::Match);
        map
    };
}

/// The closed set of lexical tokens.
///
/// `StoreArrow` and `DoubleQuote` are part of the vocabulary but are never
/// produced by the tokenizer; they are reserved for unimplemented syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Type,
    Def,
    Match,
    Ident(String),
    Str(String),
    Num(f64),
    LeftPar,
    RightPar,
    LeftChevron,
    RightChevron,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Arrow,
    StoreArrow,
    Equal,
    Comma,
    Semicolon,
    DoubleQuote,
    Pipe,
    Eof,
}

/// Fieldless mirror of [`Token`], used to consume by kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Type,
    Def,
    Match,
    Ident,
    Str,
    Num,
    LeftPar,
    RightPar,
    LeftChevron,
    RightChevron,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Arrow,
    StoreArrow,
    Equal,
    Comma,
    Semicolon,
    DoubleQuote,
    Pipe,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Type => TokenKind::Type,
            Token::Def => TokenKind::Def,
            Token::Match => TokenKind::Match,
            Token::Ident(_) => TokenKind::Ident,
            Token::Str(_) => TokenKind::Str,
            Token::Num(_) => TokenKind::Num,
            Token::LeftPar => TokenKind::LeftPar,
            Token::RightPar => TokenKind::RightPar,
            Token::LeftChevron => TokenKind::LeftChevron,
            Token::RightChevron => TokenKind::RightChevron,
            Token::LeftBracket => TokenKind::LeftBracket,
            Token::RightBracket => TokenKind::RightBracket,
            Token::LeftBrace => TokenKind::LeftBrace,
            Token::RightBrace => TokenKind::RightBrace,
            Token::Arrow => TokenKind::Arrow,
            Token::StoreArrow => TokenKind::StoreArrow,
            Token::Equal => TokenKind::Equal,
            Token::Comma => TokenKind::Comma,
            Token::Semicolon => TokenKind::Semicolon,
            Token::DoubleQuote => TokenKind::DoubleQuote,
            Token::Pipe => TokenKind::Pipe,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Whether the token is valid in a term-name position.
    ///
    /// The bare chevrons double as term names outside a generics position.
    pub fn is_term(&self) -> bool {
        matches!(
            self,
            Token::LeftChevron | Token::RightChevron | Token::Ident(_)
        )
    }

    pub fn is_ident(&self) -> bool {
        matches!(self, Token::Ident(_))
    }

    /// Whether the token can start an expression.
    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            Token::LeftBracket | Token::LeftBrace | Token::Match | Token::Str(_) | Token::Num(_)
        ) || self.is_term()
    }
}

/// A token paired with the location of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    pub token: Token,
    pub location: Location,
}
