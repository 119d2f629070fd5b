//! Monkey CLI
//!
//! With no arguments, starts the token REPL on stdin/stdout.

use std::io;

use monkeyc::commands::lex_file;
use monkeyc::repl::{self, ReplConfig};

fn main() {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    tracing::debug!(?args, "starting");

    match args.get(1).map(String::as_str) {
        None | Some("repl") => run_repl(),
        Some("lex") => {
            if args.len() < 3 {
                eprintln!("Usage: monkey lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn run_repl() {
    println!("This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::start(stdin.lock(), stdout.lock(), &ReplConfig::default()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Monkey - token REPL and lexer tools");
    println!();
    println!("Usage: monkey [command]");
    println!();
    println!("Commands:");
    println!("  repl          Start the interactive token REPL (default)");
    println!("  lex <file>    Print the token stream of a file");
    println!("  help          Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_lexer=trace) for debug logging.");
}
