use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binary operator precedence. Higher binds tighter.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Equality = 1,
    Relational = 2,
    Additive = 3,
    Multiplicative = 4,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.binary(TokenKind::Equals, BindingPower::Equality);

    // Relational
    parser.binary(TokenKind::Less, BindingPower::Relational);
    parser.binary(TokenKind::LessEquals, BindingPower::Relational);
    parser.binary(TokenKind::Greater, BindingPower::Relational);
    parser.binary(TokenKind::GreaterEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.binary(TokenKind::Plus, BindingPower::Additive);
    parser.binary(TokenKind::Dash, BindingPower::Additive);
    parser.binary(TokenKind::Star, BindingPower::Multiplicative);
    parser.binary(TokenKind::Slash, BindingPower::Multiplicative);

    // Primaries
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::While, parse_while_expr);
}

// Lookup tables inside parser struct, so each parser owns its own
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type BPLookup = HashMap<TokenKind, i32>;
