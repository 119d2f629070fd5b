//! Driver error type.
//!
//! Lexical problems never show up here; the scanner reports them in-band as
//! `Illegal` tokens. Only the I/O around the REPL can fail.

use std::io;

/// Failure while running the REPL.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// Reading the next line of input failed.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    /// Writing the prompt or a token failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}
