//! Reserved keyword resolution.
//!
//! The table is a compiled `match`, so it exists before any scanner does
//! and can never change. Lookup is exact and case-sensitive: `Let`, `LET`,
//! and `lets` are all plain identifiers.

use monkey_token::TokenKind;

/// Spellings of every reserved keyword.
pub const KEYWORDS: [&str; 7] = ["fn", "let", "true", "false", "if", "else", "return"];

/// Look up a reserved keyword by text.
///
/// Returns `None` for anything that is not byte-for-byte one of
/// [`KEYWORDS`].
///
/// Uses the length as a first-pass filter: keywords are 2-6 bytes, so any
/// other length is rejected without a string compare.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Function),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

/// Classify an identifier-shaped word: its keyword kind, or `Ident`.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Ident)
}
