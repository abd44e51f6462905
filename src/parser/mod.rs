//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! This module turns the lexer's tokens into function definitions, one
//! top-level construct per call. It uses:
//!
//! - Recursive descent for functions, prototypes, calls, `if` and `while`
//! - Precedence climbing for chains of binary operators
//! - A NUD (null denotation) table to dispatch primary expressions
//!
//! Errors abort only the construct being parsed.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
