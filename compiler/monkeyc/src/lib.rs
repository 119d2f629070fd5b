//! Monkey driver.
//!
//! Hosts the interactive token REPL and the `lex` debugging command on top
//! of `monkey_lexer`:
//!
//! ```text
//! stdin line ──► Scanner ──► Token ──► "{Type:.. Literal:..}" on stdout
//! ```
//!
//! # Debugging
//!
//! Logging is off unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=monkeyc=debug,monkey_lexer=trace monkey`. Log lines go to
//! stderr so they never interleave with REPL output.

use std::sync::Once;

pub mod commands;
mod error;
pub mod repl;

pub use error::ReplError;
pub use repl::ReplConfig;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
