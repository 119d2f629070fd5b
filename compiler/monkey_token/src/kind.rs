//! Token categories.
//!
//! `TokenKind` is a closed, one-byte enumeration. Discriminants are grouped
//! into semantic ranges so a kind can be classified with a single compare:
//!
//! | Range   | Group                   |
//! |---------|-------------------------|
//! | 0-15    | identifiers & literals  |
//! | 32-63   | operators               |
//! | 80-95   | delimiters              |
//! | 96-127  | keywords                |
//! | 240-254 | errors                  |
//! | 255     | end of input            |

use std::fmt;

/// Category of a lexical token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // === Identifiers & Literals (0-15) ===
    /// Identifier that is not a reserved keyword.
    Ident = 0,
    /// Unsigned decimal integer literal.
    Int = 1,

    // === Operators (32-63) ===
    /// `=`
    Assign = 32,
    /// `+`
    Plus = 33,
    /// `-`
    Minus = 34,
    /// `!`
    Bang = 35,
    /// `*`
    Asterisk = 36,
    /// `/`
    Slash = 37,
    /// `<`
    Lt = 38,
    /// `>`
    Gt = 39,
    /// `==`
    Eq = 40,
    /// `!=`
    NotEq = 41,

    // === Delimiters (80-95) ===
    /// `,`
    Comma = 80,
    /// `;`
    Semicolon = 81,
    /// `(`
    LParen = 82,
    /// `)`
    RParen = 83,
    /// `{`
    LBrace = 84,
    /// `}`
    RBrace = 85,

    // === Keywords (96-127) ===
    /// `fn`
    Function = 96,
    /// `let`
    Let = 97,
    /// `true`
    True = 98,
    /// `false`
    False = 99,
    /// `if`
    If = 100,
    /// `else`
    Else = 101,
    /// `return`
    Return = 102,

    // === Errors (240-254) ===
    /// A byte outside the recognized alphabet.
    Illegal = 240,

    // === Control ===
    /// End of input. Always carries an empty literal.
    Eof = 255,
}

impl TokenKind {
    /// Canonical type name, as printed by the REPL.
    ///
    /// Operators and delimiters are named by their spelling; every other
    /// kind has an upper-case name (`IDENT`, `LET`, `EOF`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
        }
    }

    /// Fixed source spelling of this kind, if it has one.
    ///
    /// Returns `None` for kinds whose literal depends on the source:
    /// `Ident`, `Int`, `Illegal`, and `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            // Operator and delimiter names are their spelling.
            _ if self.is_operator() || self.is_delimiter() => Some(self.name()),
            _ => None,
        }
    }

    /// Returns `true` for the seven reserved words.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 96..=127)
    }

    /// Returns `true` for arithmetic, comparison, and assignment operators.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self as u8, 32..=63)
    }

    /// Returns `true` for punctuation delimiters.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(self as u8, 80..=95)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
