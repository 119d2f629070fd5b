use std::fmt;

use crate::TokenKind;

/// A classified unit of source text.
///
/// `literal` is the exact source text that produced the token: the full
/// identifier or digit run, both characters of `==`/`!=`, or the single
/// offending character of an `Illegal` token. `Eof` tokens carry an empty
/// literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    /// Create a token from a kind and its source text.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders as `{Type:LET Literal:let}`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}
