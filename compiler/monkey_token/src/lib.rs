//! Token model for the Monkey language.
//!
//! Defines the closed set of token categories ([`TokenKind`]) and the token
//! record ([`Token`]) produced by `monkey_lexer` and consumed by the parser.
//! This crate has no behavior beyond construction and formatting.

mod kind;
mod token;

pub use kind::TokenKind;
pub use token::Token;
