//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps token construction in the lexer handlers short.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$offset` - Byte offset of the token in the source
/// * `$length` - Length of the token in bytes
/// * `$value` - Optional literal text (identifiers and numbers only)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, 4, 2, Some("42".to_string()));
/// let token = MK_TOKEN!(TokenKind::Plus, 7, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $offset:expr, $length:expr) => {
        Token {
            kind: $kind,
            offset: $offset,
            length: Some($length),
            value: None,
        }
    };
    ($kind:expr, $offset:expr, $length:expr, $value:expr) => {
        Token {
            kind: $kind,
            offset: $offset,
            length: Some($length),
            value: $value,
        }
    };
}
