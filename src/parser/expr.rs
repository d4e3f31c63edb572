use crate::{
    ast::expressions::{Expr, Literal, MatchBranch},
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Dispatches on the buffered token: literals, `match`, closures, terms.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    match parser.current_kind() {
        TokenKind::Str | TokenKind::Num => parse_literal(parser),
        TokenKind::Match => parse_match(parser),
        TokenKind::LeftBracket => {
            parser.consume(TokenKind::LeftBracket)?;
            let exprs = parse_expr_list(parser)?;
            parser.consume(TokenKind::RightBracket)?;

            Ok(Expr::Closure { exprs })
        }
        _ if parser.current_token().is_term() => Ok(Expr::Term {
            id: parser.parse_term()?,
        }),
        _ => Err(parser.error(ParseErrorKind::ExpectedTerm)),
    }
}

/// Parses expressions while the buffered token can start one. May be empty.
pub fn parse_expr_list(parser: &mut Parser) -> Result<Vec<Expr>, ParseError> {
    let mut exprs = vec![];

    while parser.current_token().is_expr() {
        exprs.push(parse_expr(parser)?);
    }

    Ok(exprs)
}

/// Parses a definition body: one required expression plus any further ones.
pub fn parse_term_body(parser: &mut Parser) -> Result<Vec<Expr>, ParseError> {
    let mut body = vec![parse_expr(parser)?];
    body.extend(parse_expr_list(parser)?);

    Ok(body)
}

/// Parses `match` with zero or more `| Cons [ ... ]` branches. A match
/// without branches is accepted; no minimum-arity check exists here.
pub fn parse_match(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.consume(TokenKind::Match)?;

    let mut branches = vec![];

    while parser.try_consume(&Token::Pipe)? {
        let cons = parser.parse_ident()?;

        parser.consume(TokenKind::LeftBracket)?;
        let exprs = parse_expr_list(parser)?;
        parser.consume(TokenKind::RightBracket)?;

        branches.push(MatchBranch { cons, exprs });
    }

    Ok(Expr::Match { branches })
}

pub fn parse_literal(parser: &mut Parser) -> Result<Expr, ParseError> {
    let literal = match parser.current_token() {
        Token::Str(s) => Literal::Str(s.clone()),
        Token::Num(n) => Literal::Num(*n),
        _ => return Err(parser.error(ParseErrorKind::ExpectedLiteral)),
    };

    parser.advance()?;
    Ok(Expr::Literal(literal))
}
