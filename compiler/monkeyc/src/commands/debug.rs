//! Debug command: `lex` for inspecting the token stream of a file.

use std::io::{self, Write};

use monkey_lexer::tokenize;
use monkey_token::Token;

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "lexing file");

    let stdout = io::stdout();
    if let Err(e) = write_tokens(&mut stdout.lock(), path, &content) {
        eprintln!("error writing tokens: {e}");
        std::process::exit(1);
    }
}

/// Write the token listing for `source` under a `Tokens for '<path>'` header.
///
/// The count and listing include the closing `Eof` token.
pub fn write_tokens<W: Write>(out: &mut W, path: &str, source: &str) -> io::Result<()> {
    let toks: Vec<Token> = tokenize(source);
    writeln!(out, "Tokens for '{}' ({} tokens):", path, toks.len())?;
    for tok in &toks {
        writeln!(out, "  {tok}")?;
    }
    Ok(())
}
