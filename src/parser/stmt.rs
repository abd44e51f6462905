use crate::{
    ast::ast::{FunctionDef, Prototype},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_block_expr, parse_expr},
    parser::Parser,
};

/// `'def' prototype '{' expr '}'`
pub fn parse_fn_definition(parser: &mut Parser) -> Result<FunctionDef, Error> {
    let start = parser.expect(TokenKind::Def)?.offset;

    let prototype = parse_prototype(parser, start)?;
    let body = parse_block_expr(parser, "the function body")?;

    Ok(FunctionDef { prototype, body })
}

/// `IDENTIFIER '(' (IDENTIFIER (',' IDENTIFIER)*)? ')'`
///
/// Parameter names must be unique.
pub fn parse_prototype(parser: &mut Parser, offset: usize) -> Result<Prototype, Error> {
    let name = parser
        .expect_error(TokenKind::Identifier, "expected function name after `def`")?
        .text();

    parser.expect_error(TokenKind::OpenParen, "expected `(` after function name")?;

    let mut parameters: Vec<String> = Vec::new();
    if parser.current_token_kind() != Some(TokenKind::CloseParen) {
        loop {
            let token = parser.expect_error(TokenKind::Identifier, "expected parameter name")?;
            let parameter = token.text();

            if parameters.contains(&parameter) {
                return Err(Error::new(
                    ErrorImpl::DuplicateParameter {
                        parameter,
                        function: name,
                    },
                    parser.position_of(&token),
                ));
            }
            parameters.push(parameter);

            if parser.current_token_kind() == Some(TokenKind::Comma) {
                parser.advance()?;
            } else {
                break;
            }
        }
    }

    parser.expect_error(TokenKind::CloseParen, "expected `)` after parameters")?;

    Ok(Prototype {
        name,
        parameters,
        offset,
    })
}

/// A bare expression at top level, wrapped so it can be lowered like any
/// other function.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<FunctionDef, Error> {
    let offset = parser.get_position().0;
    let body = parse_expr(parser)?;

    Ok(FunctionDef::anonymous(body, offset))
}
