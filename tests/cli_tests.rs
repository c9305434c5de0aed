// End-to-end tests for the `minilang` binary

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_file(source: &str) -> Output {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(source.as_bytes())
        .expect("Failed to write temp file");

    Command::new(env!("CARGO_BIN_EXE_minilang"))
        .arg(file.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run minilang")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_accepts_assignment() {
    let output = run_file("x = 1 + 2\n");

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Tokens:",
            "IDENTIFIER: x",
            "OPERATOR: =",
            "INTEGER_LITERAL: 1",
            "OPERATOR: +",
            "INTEGER_LITERAL: 2",
            "Assignment: x",
        ]
    );
}

#[test]
fn test_accepts_integer_wider_than_i64() {
    let output = run_file("x = 99999999999999999999\n");

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Tokens:",
            "IDENTIFIER: x",
            "OPERATOR: =",
            "INTEGER_LITERAL: 99999999999999999999",
            "Assignment: x",
        ]
    );
}

#[test]
fn test_lexical_error_printed_before_tokens() {
    let output = run_file("x = @");

    assert!(!output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Lexical Error: Line 1, unrecognized token '@'",
            "Tokens:",
            "IDENTIFIER: x",
            "OPERATOR: =",
            "Syntax Error: Expected factor but found end of input",
        ]
    );
}

#[test]
fn test_syntax_error_is_last_line() {
    let output = run_file("1 2\nx = 3");

    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Syntax Error: Unexpected token INTEGER_LITERAL in statement")
    );
    assert!(!lines.iter().any(|l| l.starts_with("Assignment")));
}

#[test]
fn test_lexical_errors_alone_exit_zero() {
    let output = run_file("print 1 $");

    assert!(output.status.success());
}

#[test]
fn test_empty_file() {
    let output = run_file("");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Tokens:"]);
}

#[test]
fn test_if_else_with_punctuation() {
    let output = run_file("if x : print 1 else : print 2");

    assert!(output.status.success());
    assert!(stdout_lines(&output).contains(&"PUNCTUATION: :".to_string()));
}

#[test]
fn test_usage_error_without_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_minilang"))
        .output()
        .expect("Failed to run minilang");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage:"));
}

#[test]
fn test_usage_error_with_extra_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_minilang"))
        .args(["a.mini", "b.mini"])
        .output()
        .expect("Failed to run minilang");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage:"));
}

#[test]
fn test_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_minilang"))
        .arg("definitely/not/here.mini")
        .output()
        .expect("Failed to run minilang");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}
