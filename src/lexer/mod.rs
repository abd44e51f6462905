//! Lexical analysis.
//!
//! Converts source text into a flat list of tokens for the parser. It handles:
//!
//! - Identifiers, keywords and integer literals (regex-matched at the cursor)
//! - One- and two-character operators with one character of lookahead
//! - `#` line comments and whitespace, which produce no tokens
//! - Non-fatal diagnostics for unrecognised characters and reserved words

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
