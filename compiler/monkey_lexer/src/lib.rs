//! Lexer for the Monkey language.
//!
//! Turns source text into a stream of [`Token`]s, one per call to
//! [`Scanner::next_token`]. The scanner never fails: bytes outside the
//! alphabet come back as [`TokenKind::Illegal`] tokens and interpreting them
//! is left to the parser.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Cursor (bytes, one-byte lookahead) ──► Scanner ──► Token
//!                                                   │
//!                                                   └── keywords::lookup
//! ```
//!
//! # ASCII Only
//!
//! Classification works on single bytes. A multi-byte UTF-8 character is
//! reported as one `Illegal` token per byte.
//!
//! # Debugging
//!
//! The scanner emits a `trace` event per token. Enable with
//! `RUST_LOG=monkey_lexer=trace`.

mod cursor;
pub mod keywords;
mod scanner;

pub use keywords::lookup_ident;
pub use monkey_token::{Token, TokenKind};
pub use scanner::Scanner;

/// Scan `input` to completion.
///
/// The returned list always ends with exactly one `Eof` token.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        let done = tok.is_eof();
        tokens.push(tok);
        if done {
            break;
        }
    }
    tracing::debug!(count = tokens.len(), "tokenized input");
    tokens
}
