use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;

    parse_binary_expr(parser, 0, left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token_kind) = parser.current_token_kind() else {
        return Err(parser.end_of_input("an expression"));
    };

    let Some(handler) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("an expression", "expected an expression"));
    };

    // Every nested form re-enters through here.
    parser.enter_nesting()?;
    let result = handler(parser);
    parser.exit_nesting();

    result
}

/// Precedence climbing over a chain of binary operators.
///
/// Folds operators binding at least as tightly as `min_precedence` into
/// `left`. When the operator after a right-hand side binds tighter than the
/// one just consumed, that right-hand side is climbed first with a raised
/// threshold, so equal precedences group to the left.
pub fn parse_binary_expr(
    parser: &mut Parser,
    min_precedence: i32,
    mut left: Expr,
) -> Result<Expr, Error> {
    loop {
        let precedence = parser.current_precedence();
        if precedence < min_precedence {
            return Ok(left);
        }

        let operator = parser.advance()?.kind;
        let mut right = parse_primary_expr(parser)?;

        if precedence < parser.current_precedence() {
            right = parse_binary_expr(parser, precedence + 1, right)?;
        }

        left = Expr::binary(operator, left, right);
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;
    let text = token.text();

    match text.parse::<f64>() {
        Ok(value) => Ok(Expr::Number(value)),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: text },
            parser.position_of(&token),
        )),
    }
}

/// A variable reference, or a call when the name is followed by `(`.
///
/// Argument counts are not checked against any prototype here.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.advance()?.text();

    if parser.current_token_kind() != Some(TokenKind::OpenParen) {
        return Ok(Expr::Variable(name));
    }
    parser.advance()?;

    let mut arguments = vec![];

    if parser.current_token_kind() == Some(TokenKind::CloseParen) {
        parser.advance()?;
        return Ok(Expr::Call {
            callee: name,
            arguments,
        });
    }

    loop {
        arguments.push(parse_expr(parser)?);

        match parser.current_token_kind() {
            Some(TokenKind::CloseParen) => {
                parser.advance()?;
                break;
            }
            Some(TokenKind::Comma) => {
                parser.advance()?;
            }
            _ => {
                return Err(parser.unexpected(
                    "`)` or `,`",
                    "expected `)` or `,` in argument list",
                ))
            }
        }
    }

    Ok(Expr::Call {
        callee: name,
        arguments,
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "expected `)` to close the group")?;

    Ok(expr)
}

/// `'{' expr '}'`, shared by function bodies and control-flow branches.
pub fn parse_block_expr(parser: &mut Parser, context: &str) -> Result<Expr, Error> {
    parser.expect_error(TokenKind::OpenCurly, &format!("expected `{{` to open {}", context))?;
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseCurly, &format!("expected `}}` to close {}", context))?;

    Ok(expr)
}

fn parse_condition(parser: &mut Parser, keyword: &str) -> Result<Expr, Error> {
    parser.expect_error(TokenKind::OpenParen, &format!("expected `(` after `{}`", keyword))?;
    let condition = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "expected `)` after condition")?;

    Ok(condition)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let condition = parse_condition(parser, "if")?;
    let then_branch = parse_block_expr(parser, "the if branch")?;

    parser.expect_error(
        TokenKind::Else,
        "expected `else`, an if expression needs both branches",
    )?;

    let else_branch = parse_block_expr(parser, "the else branch")?;

    Ok(Expr::if_else(condition, then_branch, else_branch))
}

pub fn parse_while_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let condition = parse_condition(parser, "while")?;
    let body = parse_block_expr(parser, "the loop body")?;

    Ok(Expr::while_loop(condition, body))
}
