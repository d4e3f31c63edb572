use std::mem;

use crate::{
    ast::definitions::Ast,
    errors::errors::{ParseError, ParseErrorKind},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenInfo, TokenKind},
    },
};

use super::definitions::{parse_term_def, parse_type_def};

/// The parser state: the tokenizer plus exactly one buffered token.
///
/// The buffered token is fetched eagerly, so grammar code always branches
/// on a token that has already been scanned. The pair forms a single
/// forward-only state machine owned by one caller; independent sources get
/// independent instances.
pub struct Parser {
    tokenizer: Tokenizer,
    current: TokenInfo,
}

impl Parser {
    pub fn new(source: &str) -> Result<Parser, ParseError> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;

        Ok(Parser { tokenizer, current })
    }

    /// Returns the buffered token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current.token
    }

    /// Returns the kind of the buffered token.
    pub fn current_kind(&self) -> TokenKind {
        self.current.token.kind()
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Result<TokenInfo, ParseError> {
        let next = self.tokenizer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Builds an error located at the buffered (offending) token.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current.location.clone())
    }

    /// Succeeds only if the buffered token has exactly the given kind,
    /// advancing past it; otherwise fails with a kind-mismatch diagnostic.
    pub fn consume(&mut self, expected: TokenKind) -> Result<TokenInfo, ParseError> {
        let found = self.current_kind();

        if found == expected {
            self.advance()
        } else {
            Err(self.error(ParseErrorKind::TokenMismatch { expected, found }))
        }
    }

    /// Like [`consume`](Parser::consume), with the failure message replaced
    /// by `Expected <what>`.
    pub fn expect(&mut self, expected: TokenKind, what: &str) -> Result<TokenInfo, ParseError> {
        self.consume(expected)
            .map_err(|_| self.error(ParseErrorKind::Expected(what.to_string())))
    }

    /// Advances only if the buffered token equals `token` exactly; returns
    /// whether it did. Used for optional punctuation.
    pub fn try_consume(&mut self, token: &Token) -> Result<bool, ParseError> {
        if self.current.token == *token {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a term name: a plain identifier or a bare chevron.
    pub fn parse_term(&mut self) -> Result<String, ParseError> {
        let id = match self.current_token() {
            Token::LeftChevron => "<".to_string(),
            Token::RightChevron => ">".to_string(),
            Token::Ident(id) => id.clone(),
            _ => return Err(self.error(ParseErrorKind::ExpectedTermName)),
        };

        self.advance()?;
        Ok(id)
    }

    /// Consumes a plain identifier and returns its text.
    pub fn parse_ident(&mut self) -> Result<String, ParseError> {
        let Token::Ident(id) = self.current_token() else {
            return Err(self.error(ParseErrorKind::ExpectedIdentifier));
        };

        let id = id.clone();
        self.advance()?;
        Ok(id)
    }
}

/// Parses a full source text into an AST, or the first syntax error.
///
/// Top-level dispatch is strict: `type` and `def` open definitions, the end
/// marker stops the loop, and anything else is rejected immediately.
pub fn parse(source: &str) -> Result<Ast, ParseError> {
    let mut parser = Parser::new(source)?;
    let mut definitions = vec![];

    loop {
        match parser.current_kind() {
            TokenKind::Type => definitions.push(parse_type_def(&mut parser)?),
            TokenKind::Def => definitions.push(parse_term_def(&mut parser)?),
            TokenKind::Eof => break,
            _ => return Err(parser.error(ParseErrorKind::ExpectedTopLevelStatement)),
        }
    }

    Ok(definitions)
}
