// MiniLang: scan a source file, dump its tokens, and check its syntax

use std::fs;
use std::io;
use std::process;

use minilang::diagnostics::ConsoleReporter;
use minilang::parser::lexer::Scanner;
use minilang::parser::parse::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr and stay off unless RUST_LOG asks for them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        let program_name = args.first().map(String::as_str).unwrap_or("minilang");
        println!("Usage: {} <file_path>", program_name);
        process::exit(1);
    }

    let path = &args[1];
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", path, e);
            process::exit(1);
        }
    };

    let mut reporter = ConsoleReporter;

    tracing::debug!(%path, "scanning");
    let tokens = Scanner::new(&source).tokenize(&mut reporter);

    println!("Tokens:");
    for token in &tokens {
        println!("{}", token);
    }

    tracing::debug!(count = tokens.len(), "parsing");
    if let Err(err) = Parser::new(&tokens, &mut reporter).parse_program() {
        tracing::debug!(position = err.position, location = ?err.location, "parse failed");
        println!("Syntax Error: {}", err);
        process::exit(1);
    }
}
