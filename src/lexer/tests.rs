//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, reserved words and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Offsets and lengths
//! - Error recovery

use crate::errors::errors::{Error, ErrorImpl, Severity};

use super::{
    lexer::tokenize,
    tokens::{render_token_list, Token, TokenKind},
};

fn lex(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut diagnostics = vec![];
    let tokens = tokenize(source, Some("test.lasil".to_string()), &mut diagnostics);
    (tokens, diagnostics)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let (tokens, diagnostics) = lex("def if else while return");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Def,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Return,
        ]
    );
    assert!(tokens.iter().all(|token| token.value.is_none()));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = lex("foo bar baz_123 _underscore CamelCase define");

    assert_eq!(tokens.len(), 6);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value.as_deref(), Some("foo"));
    assert_eq!(tokens[2].value.as_deref(), Some("baz_123"));
    assert_eq!(tokens[3].value.as_deref(), Some("_underscore"));
    assert_eq!(tokens[4].value.as_deref(), Some("CamelCase"));
    assert_eq!(tokens[5].value.as_deref(), Some("define"));
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, diagnostics) = lex("42 0 007 12345678901234567890");

    assert_eq!(kinds(&tokens), vec![TokenKind::Number; 4]);
    assert_eq!(tokens[0].value.as_deref(), Some("42"));
    assert_eq!(tokens[1].value.as_deref(), Some("0"));
    assert_eq!(tokens[2].value.as_deref(), Some("007"));
    assert_eq!(tokens[3].value.as_deref(), Some("12345678901234567890"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_tokenize_number_then_identifier() {
    let (tokens, _) = lex("12abc");

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Identifier]);
    assert_eq!(tokens[0].value.as_deref(), Some("12"));
    assert_eq!(tokens[1].value.as_deref(), Some("abc"));
}

#[test]
fn test_tokenize_decimal_point_is_not_a_number() {
    let (tokens, diagnostics) = lex("3.14");

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Number]);
    assert_eq!(tokens[0].value.as_deref(), Some("3"));
    assert_eq!(tokens[1].value.as_deref(), Some("14"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].get_kind(),
        &ErrorImpl::UnrecognisedCharacter { character: '.' }
    );
    assert_eq!(diagnostics[0].get_position().0, 1);
}

#[test]
fn test_tokenize_operators() {
    let (tokens, _) = lex("+ - * / = == < > <= >=");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
        ]
    );
}

#[test]
fn test_tokenize_two_character_lookahead() {
    let (tokens, _) = lex("a<=b<c==d=e>=f>g===");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::GreaterEquals,
            TokenKind::Identifier,
            TokenKind::Greater,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Assignment,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let (tokens, _) = lex("( ) { } [ ] , ;");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_comment_line() {
    let (tokens, diagnostics) = lex("# note\n1");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value.as_deref(), Some("1"));
    assert_eq!(tokens[0].offset, 7);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_tokenize_trailing_comment() {
    let (tokens, _) = lex("x + 1 # the rest is ignored: @ $ def\r\ny");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(tokens[3].value.as_deref(), Some("y"));
}

#[test]
fn test_tokenize_empty_input() {
    let (tokens, diagnostics) = lex("");
    assert!(tokens.is_empty());
    assert!(diagnostics.is_empty());

    let (tokens, _) = lex("  \n\t # only a comment");
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_offsets_and_lengths() {
    let (tokens, _) = lex("def add(a, b) { a <= 10 }");

    let spans: Vec<(usize, Option<usize>)> = tokens
        .iter()
        .map(|token| (token.offset, token.length))
        .collect();

    assert_eq!(
        spans,
        vec![
            (0, Some(3)),
            (4, Some(3)),
            (7, Some(1)),
            (8, Some(1)),
            (9, Some(1)),
            (11, Some(1)),
            (12, Some(1)),
            (14, Some(1)),
            (16, Some(1)),
            (18, Some(2)),
            (21, Some(2)),
            (24, Some(1)),
        ]
    );
}

#[test]
fn test_tokenize_offsets_never_overlap() {
    let source = "def fib(x) {\n  if (x < 3) { 1 } else { fib(x-1)+fib(x-2) }\n}\n# tail\nfib(10)";
    let (tokens, _) = lex(source);

    for pair in tokens.windows(2) {
        assert!(pair[0].offset < pair[1].offset);
        assert!(pair[0].end() <= pair[1].offset);
    }
    for token in &tokens {
        let text = &source[token.offset..token.end()];
        assert!(!text.trim().is_empty());
        assert!(!text.contains('#'));
    }
}

#[test]
fn test_tokenize_unrecognized_character_recovers() {
    let (tokens, diagnostics) = lex("x @ 1 $ y");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Number, TokenKind::Identifier]
    );
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].get_position().0, 2);
    assert_eq!(diagnostics[1].get_position().0, 6);
    assert!(diagnostics
        .iter()
        .all(|diagnostic| diagnostic.get_severity() == Severity::Error));
}

#[test]
fn test_tokenize_multibyte_character_recovers() {
    let (tokens, diagnostics) = lex("a é b");

    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Identifier]);
    assert_eq!(tokens[1].offset, 5);
    assert_eq!(
        diagnostics[0].get_kind(),
        &ErrorImpl::UnrecognisedCharacter { character: 'é' }
    );
}

#[test]
fn test_tokenize_reserved_word_warns() {
    let (tokens, diagnostics) = lex("class + new");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Plus, TokenKind::Identifier]
    );
    assert_eq!(tokens[0].value.as_deref(), Some("class"));
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].get_severity(), Severity::Warning);
    assert_eq!(diagnostics[0].get_position().0, 0);
    assert_eq!(
        diagnostics[1].get_kind(),
        &ErrorImpl::ReservedIdentifier {
            identifier: "new".to_string()
        }
    );
    assert_eq!(diagnostics[1].get_position().0, 8);
}

#[test]
fn test_tokenize_default_file_name() {
    let mut diagnostics = vec![];
    tokenize("@", None, &mut diagnostics);

    assert_eq!(diagnostics[0].get_position().1.as_str(), "shell");
}

#[test]
fn test_token_text() {
    let (tokens, _) = lex("foo >= 7");

    assert_eq!(tokens[0].text(), "foo");
    assert_eq!(tokens[1].text(), ">=");
    assert_eq!(tokens[2].text(), "7");
}

#[test]
fn test_tokenize_non_ascii_whitespace_is_unrecognised() {
    let (tokens, diagnostics) = lex("1\u{00A0}+\u{2003}2");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]
    );
    assert_eq!(tokens[1].offset, 3);
    assert_eq!(tokens[2].offset, 7);

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[0].get_kind(),
        &ErrorImpl::UnrecognisedCharacter { character: '\u{00A0}' }
    );
    assert_eq!(diagnostics[0].get_position().0, 1);
    assert_eq!(
        diagnostics[1].get_kind(),
        &ErrorImpl::UnrecognisedCharacter { character: '\u{2003}' }
    );
    assert_eq!(diagnostics[1].get_position().0, 4);
}

#[test]
fn test_tokenize_ascii_whitespace_is_skipped() {
    let (tokens, diagnostics) = lex("1\t+\x0B2\x0C\r\n");

    assert_eq!(tokens.len(), 3);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_token_display() {
    let (tokens, _) = lex("def f(x) 42");

    assert_eq!(tokens[0].to_string(), "Def @0");
    assert_eq!(tokens[1].to_string(), "Identifier (f) @4");
    assert_eq!(tokens[5].to_string(), "Number (42) @9");
}

#[test]
fn test_render_token_list() {
    let (tokens, _) = lex("x + 1");

    assert_eq!(
        render_token_list(&tokens),
        "Token List\nIdentifier (x) @0\nPlus @2\nNumber (1) @4\n"
    );
    assert_eq!(render_token_list(&[]), "Token List\n");
}
