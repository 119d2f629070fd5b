//! Hand-written single-pass scanner.
//!
//! # Design
//!
//! `next_token` skips whitespace, then dispatches on the current byte. Each
//! arm calls a focused method that consumes exactly the bytes of its token
//! and leaves the cursor on the first byte of whatever follows. No arm
//! relies on a shared trailing "consume one byte" step, so identifier and
//! number runs (which already stop past their last byte) need no special
//! casing.

use monkey_token::{Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords;

/// Pull-based scanner over one complete input string.
///
/// Call [`next_token`](Self::next_token) until it returns `Eof`. Further
/// calls keep returning `Eof` with an empty literal.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned on the first byte of `input`.
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Create a scanner over raw bytes.
    ///
    /// The input need not be valid UTF-8: every byte outside the alphabet,
    /// including each byte of a malformed sequence, becomes one `Illegal`
    /// token.
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        let tok = match self.cursor.current() {
            None => Token::eof(),
            Some(b'=') => self.with_equal(start, TokenKind::Assign, TokenKind::Eq),
            Some(b'!') => self.with_equal(start, TokenKind::Bang, TokenKind::NotEq),
            Some(b'+') => self.single(start, TokenKind::Plus),
            Some(b'-') => self.single(start, TokenKind::Minus),
            Some(b'*') => self.single(start, TokenKind::Asterisk),
            Some(b'/') => self.single(start, TokenKind::Slash),
            Some(b'<') => self.single(start, TokenKind::Lt),
            Some(b'>') => self.single(start, TokenKind::Gt),
            Some(b',') => self.single(start, TokenKind::Comma),
            Some(b';') => self.single(start, TokenKind::Semicolon),
            Some(b'(') => self.single(start, TokenKind::LParen),
            Some(b')') => self.single(start, TokenKind::RParen),
            Some(b'{') => self.single(start, TokenKind::LBrace),
            Some(b'}') => self.single(start, TokenKind::RBrace),
            Some(b) if is_ident_byte(b) => self.identifier(start),
            Some(b) if b.is_ascii_digit() => self.number(start),
            Some(b) => self.illegal(b),
        };
        trace!(kind = %tok.kind, literal = %tok.literal, start, "token");
        tok
    }

    // ─── Operators & Delimiters ──────────────────────────────────

    /// Single-byte token: advance one byte and emit `kind`.
    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    /// `=`/`!`, or `==`/`!=` when the next byte is `=`.
    ///
    /// The two-byte form always wins.
    fn with_equal(&mut self, start: usize, one: TokenKind, two: TokenKind) -> Token {
        let kind = if self.cursor.peek() == Some(b'=') {
            self.cursor.advance();
            two
        } else {
            one
        };
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    // ─── Identifiers & Numbers ───────────────────────────────────

    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.eat_while(is_ident_byte);
        let text = self.cursor.slice_from(start);
        Token::new(keywords::lookup_ident(&text), text)
    }

    fn number(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    // ─── Errors ──────────────────────────────────────────────────

    /// One unrecognized byte. Always consumes it so scanning moves on.
    ///
    /// The literal is the byte read as a Latin-1 character, so a non-ASCII
    /// byte yields exactly one token whatever the bytes around it are.
    fn illegal(&mut self, byte: u8) -> Token {
        self.cursor.advance();
        Token::new(TokenKind::Illegal, char::from(byte))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Letters and underscore. Digits do not continue an identifier.
#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}
