//! Parsing of type references and stack-effect signatures.
//!
//! A signature is a parenthesised list of inputs, optionally followed by
//! `->` and a list of outputs. List entries are either plain type
//! references (single stack cells) or nested signatures; commas between
//! entries are optional and ignored.

use crate::{
    ast::types::{FunctionType, Type},
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::{definitions::parse_generics, parser::Parser};

pub fn parse_function_type(parser: &mut Parser) -> Result<FunctionType, ParseError> {
    parser.consume(TokenKind::LeftPar)?;

    let inputs = parse_function_type_list(parser)?;

    let outputs = if parser.try_consume(&Token::Arrow)? {
        parse_function_type_list(parser)?
    } else {
        vec![]
    };

    parser.consume(TokenKind::RightPar)?;

    Ok(FunctionType::Function { inputs, outputs })
}

pub fn parse_function_type_list(parser: &mut Parser) -> Result<Vec<FunctionType>, ParseError> {
    let mut types = vec![];

    loop {
        let entry = match parser.current_kind() {
            TokenKind::LeftPar => parse_function_type(parser)?,
            TokenKind::Ident => FunctionType::Cell(parse_type(parser)?),
            _ => break,
        };

        types.push(entry);
        parser.try_consume(&Token::Comma)?;
    }

    Ok(types)
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, ParseError> {
    let name = parser.parse_ident()?;
    let generics = parse_generics(parser)?;

    Ok(Type { name, generics })
}
