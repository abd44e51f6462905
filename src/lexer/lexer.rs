use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::{
        diagnostics::DiagnosticSink,
        errors::{Error, ErrorImpl},
    },
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \\t\\r\\n\\x0B\\x0C]+").unwrap();
    static ref COMMENT_PATTERN: Regex = Regex::new("^#[^\\r\\n]*").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Called with the byte length of the text a pattern matched at the cursor.
pub type RegexHandler = fn(&mut Lexer, usize);

#[derive(Clone)]
pub struct RegexPattern {
    regex: &'static Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    keywords: HashMap<&'static str, TokenKind>,
    /// Words that are plain identifiers today but may become keywords.
    reserved: HashSet<&'static str>,
    single_char: HashMap<char, TokenKind>,
    /// `first -> (kind, second, kind when followed by second)`
    compound: HashMap<char, (TokenKind, char, TokenKind)>,
    tokens: Vec<Token>,
    diagnostics: Vec<Error>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            diagnostics: vec![],
            patterns: vec![
                RegexPattern { regex: &WHITESPACE_PATTERN, handler: skip_handler },
                RegexPattern { regex: &COMMENT_PATTERN, handler: skip_handler },
                RegexPattern { regex: &SYMBOL_PATTERN, handler: symbol_handler },
                RegexPattern { regex: &NUMBER_PATTERN, handler: number_handler },
            ],
            keywords: HashMap::from([
                ("def", TokenKind::Def),
                ("if", TokenKind::If),
                ("else", TokenKind::Else),
                ("while", TokenKind::While),
                ("return", TokenKind::Return),
            ]),
            reserved: HashSet::from([
                "for",
                "callout",
                "class",
                "interface",
                "extends",
                "implements",
                "new",
                "this",
                "string",
                "float",
                "double",
                "null",
            ]),
            single_char: HashMap::from([
                ('(', TokenKind::OpenParen),
                (')', TokenKind::CloseParen),
                ('{', TokenKind::OpenCurly),
                ('}', TokenKind::CloseCurly),
                ('[', TokenKind::OpenBracket),
                (']', TokenKind::CloseBracket),
                ('+', TokenKind::Plus),
                ('-', TokenKind::Dash),
                ('*', TokenKind::Star),
                ('/', TokenKind::Slash),
                (',', TokenKind::Comma),
                (';', TokenKind::Semicolon),
            ]),
            compound: HashMap::from([
                ('=', (TokenKind::Assignment, '=', TokenKind::Equals)),
                ('<', (TokenKind::Less, '=', TokenKind::LessEquals)),
                ('>', (TokenKind::Greater, '=', TokenKind::GreaterEquals)),
            ]),
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Character `offset` characters past the cursor, if any.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.remainder().chars().nth(offset)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }

    fn report(&mut self, error_impl: ErrorImpl) {
        let position = self.get_position();
        self.diagnostics.push(Error::new(error_impl, position));
    }

    fn match_pattern(&self) -> Option<(RegexHandler, usize)> {
        let remaining = self.remainder();
        self.patterns.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remaining)
                .map(|matched| (pattern.handler, matched.end()))
        })
    }

    fn match_operator(&mut self, current: char) -> bool {
        if let Some(&(single, second, double)) = self.compound.get(&current) {
            if self.peek(1) == Some(second) {
                self.push(MK_TOKEN!(double, self.pos, 2));
                self.advance_n(2);
            } else {
                self.push(MK_TOKEN!(single, self.pos, 1));
                self.advance_n(1);
            }
            return true;
        }

        if let Some(&kind) = self.single_char.get(&current) {
            self.push(MK_TOKEN!(kind, self.pos, 1));
            self.advance_n(1);
            return true;
        }

        false
    }
}

fn skip_handler(lexer: &mut Lexer, length: usize) {
    lexer.advance_n(length);
}

fn number_handler(lexer: &mut Lexer, length: usize) {
    // Kept as text; conversion to f64 happens in the parser.
    let matched = lexer.remainder()[..length].to_string();

    lexer.push(MK_TOKEN!(TokenKind::Number, lexer.pos, length, Some(matched)));
    lexer.advance_n(length);
}

fn symbol_handler(lexer: &mut Lexer, length: usize) {
    let value = lexer.remainder()[..length].to_string();

    if let Some(kind) = lexer.keywords.get(value.as_str()) {
        let kind = *kind;
        lexer.push(MK_TOKEN!(kind, lexer.pos, length));
    } else {
        if lexer.reserved.contains(value.as_str()) {
            lexer.report(ErrorImpl::ReservedIdentifier {
                identifier: value.clone(),
            });
        }
        lexer.push(MK_TOKEN!(TokenKind::Identifier, lexer.pos, length, Some(value)));
    }

    lexer.advance_n(length);
}

/// Splits `source` into tokens.
///
/// Never fails: unrecognised characters and reserved words used as
/// identifiers are reported to `diagnostics` and scanning carries on. No
/// end-of-input token is appended.
pub fn tokenize(
    source: &str,
    file: Option<String>,
    diagnostics: &mut impl DiagnosticSink,
) -> Vec<Token> {
    let mut lex = Lexer::new(source.to_string(), file);

    while !lex.at_eof() {
        if let Some((handler, length)) = lex.match_pattern() {
            handler(&mut lex, length);
            continue;
        }

        let Some(current) = lex.peek(0) else {
            break;
        };

        if !lex.match_operator(current) {
            lex.report(ErrorImpl::UnrecognisedCharacter { character: current });
            lex.advance_n(current.len_utf8());
        }
    }

    for diagnostic in lex.diagnostics.drain(..) {
        diagnostics.report(diagnostic);
    }

    lex.tokens
}
