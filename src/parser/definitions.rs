use crate::{
    ast::definitions::{Constructor, Definition},
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::parse_term_body,
    parser::Parser,
    types::{parse_function_type, parse_type},
};

pub fn parse_term_def(parser: &mut Parser) -> Result<Definition, ParseError> {
    parser.expect(TokenKind::Def, "keyword 'def'")?;

    let name = parser.parse_term()?;
    let generics = parse_generics(parser)?;
    let function_type = parse_function_type(parser)?;
    let assignments = parse_assignments(parser)?;

    parser.consume(TokenKind::Equal)?;

    let body = parse_term_body(parser)?;

    Ok(Definition::TermDef {
        name,
        generics,
        function_type,
        assignments,
        body,
    })
}

pub fn parse_type_def(parser: &mut Parser) -> Result<Definition, ParseError> {
    parser.expect(TokenKind::Type, "keyword 'type'")?;

    let name = parser.parse_ident()?;
    let generics = parse_generics(parser)?;

    let mut constructors = vec![];
    while parser.try_consume(&Token::Pipe)? {
        constructors.push(parse_constructor(parser)?);
    }

    Ok(Definition::TypeDef {
        name,
        generics,
        constructors,
    })
}

/// Parses an optional chevron-delimited generics list.
///
/// Only called immediately after a definition or type name, which is what
/// disambiguates generics from a chevron used as a term name: a `<` in any
/// other position never reaches this production.
pub fn parse_generics(parser: &mut Parser) -> Result<Vec<String>, ParseError> {
    let mut generics = vec![];

    if parser.try_consume(&Token::LeftChevron)? {
        generics.push(parser.parse_ident()?);

        while parser.try_consume(&Token::Comma)? {
            generics.push(parser.parse_ident()?);
        }

        parser.consume(TokenKind::RightChevron)?;
    }

    Ok(generics)
}

/// Parses optional named output bindings after a signature.
///
/// Commas between names are optional, and one trailing comma after the
/// list is accepted.
pub fn parse_assignments(parser: &mut Parser) -> Result<Vec<String>, ParseError> {
    let mut assignments = vec![];

    if parser.try_consume(&Token::Arrow)? {
        while parser.current_token().is_ident() {
            assignments.push(parser.parse_ident()?);
            parser.try_consume(&Token::Comma)?;
        }
        parser.try_consume(&Token::Comma)?;
    }

    Ok(assignments)
}

pub fn parse_constructor(parser: &mut Parser) -> Result<Constructor, ParseError> {
    let name = parser.parse_ident()?;
    let mut types = vec![];

    if parser.try_consume(&Token::LeftPar)? {
        types.push(parse_type(parser)?);

        while parser.try_consume(&Token::Comma)? {
            types.push(parse_type(parser)?);
        }

        parser.consume(TokenKind::RightPar)?;
    }

    Ok(Constructor { name, types })
}
