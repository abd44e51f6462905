use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,

    Comma,
    Semicolon,

    // Reserved
    Def,
    If,
    Else,
    While,
    Return,
}

impl TokenKind {
    /// Source spelling of fixed-text kinds. Identifiers and numbers have no
    /// fixed spelling and return their kind name.
    pub fn lexeme(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Def => "def",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
        }
    }

    /// How the kind reads in an "expected ..." message.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number => String::from("a number"),
            TokenKind::Identifier => String::from("an identifier"),
            _ => format!("`{}`", self.lexeme()),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character of the token.
    pub offset: usize,
    pub length: Option<usize>,
    /// Literal text, only present for identifiers and numbers.
    pub value: Option<String>,
}

impl Token {
    /// The text the token was written as, for use in messages.
    pub fn text(&self) -> String {
        match &self.value {
            Some(value) => value.clone(),
            None => self.kind.lexeme().to_string(),
        }
    }

    /// Offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.offset + self.length.unwrap_or(0)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({}) @{}", self.kind, value, self.offset),
            None => write!(f, "{} @{}", self.kind, self.offset),
        }
    }
}

/// Debug listing of a token stream, one token per line under a
/// `Token List` heading.
pub fn render_token_list(tokens: &[Token]) -> String {
    let mut output = String::from("Token List\n");
    for token in tokens {
        output.push_str(&token.to_string());
        output.push('\n');
    }
    output
}
