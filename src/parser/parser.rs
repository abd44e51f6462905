//! Parser state and top-level entry point.
//!
//! The Parser owns the token list and a cursor that only ever moves forward.
//! It also owns its lookup tables:
//! - NUD (null denotation) handlers for primary expressions
//! - Binding powers for binary operator precedence

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::FunctionDef,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, NUDHandler, NUDLookup},
    stmt::{parse_fn_definition, parse_top_level_expr},
};

/// Precedence reported for tokens that are not binary operators.
pub const NO_PRECEDENCE: i32 = -1;

/// How many primary expressions may be open inside one another before the
/// construct is rejected.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for primary expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for binary operator precedence
    binding_power_lookup: BPLookup,
    /// Primary expressions currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a new Parser with its lookup tables filled in.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens produced by the lexer, no end marker required
    /// * `file` - Reference-counted name of the source, used in error positions
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let mut parser = Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing, or `None` at end of input.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Consumes the current token and returns it.
    ///
    /// Fails with `UnexpectedEndOfInput` when there is nothing left.
    pub fn advance(&mut self) -> Result<Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            None => Err(self.end_of_input("another token")),
        }
    }

    /// Consumes a token of `expected_kind`, or fails with `message` without
    /// consuming anything.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        match self.current_token_kind() {
            Some(kind) if kind == expected_kind => self.advance(),
            Some(_) => Err(self.unexpected(&expected_kind.describe(), message)),
            None => Err(self.end_of_input(&expected_kind.describe())),
        }
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let message = format!("expected {}", expected_kind.describe());
        self.expect_error(expected_kind, &message)
    }

    /// Builds an error pointing at the current token, or an end-of-input
    /// error naming `expected` when the tokens have run out.
    pub fn unexpected(&self, expected: &str, message: &str) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.text(),
                    message: String::from(message),
                },
                self.position_of(token),
            ),
            None => self.end_of_input(expected),
        }
    }

    pub fn end_of_input(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            },
            self.get_position(),
        )
    }

    /// Returns true once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Discards one token. Used by the driver to resynchronise after an error.
    pub fn skip_token(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Opens one more level of nesting, failing once [`MAX_NESTING_DEPTH`]
    /// levels are already open.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Precedence of the current token, or [`NO_PRECEDENCE`] if it is not a
    /// binary operator or input has ended.
    pub fn current_precedence(&self) -> i32 {
        self.current_token_kind()
            .and_then(|kind| self.binding_power_lookup.get(&kind).copied())
            .unwrap_or(NO_PRECEDENCE)
    }

    /// Registers a binary operator with its precedence.
    pub fn binary(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power as i32);
    }

    /// Registers a primary expression handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn position_of(&self, token: &Token) -> Position {
        Position(token.offset, Rc::clone(&self.file))
    }

    /// Source position of the current token, or just past the last token
    /// once input has ended.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => self.position_of(token),
            None => Position(
                self.tokens.last().map(Token::end).unwrap_or(0),
                Rc::clone(&self.file),
            ),
        }
    }

    /// Parses exactly one top-level construct: a `def` function, or a bare
    /// expression wrapped in an anonymous zero-argument function.
    ///
    /// On failure nothing is returned for the construct and the cursor is
    /// left where the error was found; callers skip a token and retry.
    pub fn parse(&mut self) -> Result<FunctionDef, Error> {
        self.depth = 0;

        match self.current_token_kind() {
            None => Err(self.end_of_input("a function definition or expression")),
            Some(TokenKind::Def) => parse_fn_definition(self),
            Some(_) => parse_top_level_expr(self),
        }
    }
}
