//! Line-oriented token REPL.
//!
//! Each input line is scanned on its own by a fresh [`Scanner`]; nothing
//! carries over between lines. Every token except the closing `Eof` is
//! printed on its own line in `{Type:.. Literal:..}` form.

use std::io::{BufRead, Write};

use monkey_lexer::Scanner;
use tracing::debug;

use crate::ReplError;

/// Prompt printed before every read.
pub const PROMPT: &str = ">> ";

/// REPL settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text written before each line is read.
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
        }
    }
}

/// Run the REPL until `input` is exhausted.
///
/// Lines are scanned as raw bytes, so invalid UTF-8 neither ends the session
/// nor gets rewritten: each bad byte comes back as one `Illegal` token.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &ReplConfig,
) -> Result<(), ReplError> {
    let mut buf = Vec::new();
    loop {
        output
            .write_all(config.prompt.as_bytes())
            .and_then(|()| output.flush())
            .map_err(ReplError::Write)?;

        buf.clear();
        let read = input.read_until(b'\n', &mut buf).map_err(ReplError::Read)?;
        if read == 0 {
            debug!("end of input");
            return Ok(());
        }

        debug!(bytes = read, "scanning line");
        for tok in Scanner::from_bytes(&buf) {
            writeln!(output, "{tok}").map_err(ReplError::Write)?;
        }
    }
}
