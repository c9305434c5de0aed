//! Diagnostics sink shared by the scanner and the parser
//!
//! The core never prints. Every non-fatal event it produces (an unrecognized
//! lexeme, a confirmed assignment) is handed to a [`Reporter`] as a
//! [`Diagnostic`]. The CLI plugs in [`ConsoleReporter`]; tests and the viewer
//! use [`DiagnosticLog`] to keep the events in memory.

use crate::parser::lexer::{LexicalError, SourceLocation};
use std::fmt;

/// A single event emitted while scanning or parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A lexeme the scanner could not classify (it was dropped)
    Lexical(LexicalError),

    /// An assignment statement was recognized
    Assignment {
        name: String,
        location: SourceLocation,
    },
}

impl Diagnostic {
    /// Line the event refers to
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::Lexical(err) => err.location().line,
            Diagnostic::Assignment { location, .. } => location.line,
        }
    }

    /// True for problems in the source, false for confirmations
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::Lexical(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Lexical(err) => write!(f, "Lexical Error: {}", err),
            Diagnostic::Assignment { name, .. } => write!(f, "Assignment: {}", name),
        }
    }
}

/// Receiver for diagnostics produced by the core
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Writes every diagnostic to stdout as soon as it arrives
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        println!("{}", diagnostic);
    }
}

/// Records diagnostics in arrival order
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    pub entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        DiagnosticLog {
            entries: Vec::new(),
        }
    }

    /// Lexical errors only, in the order they were reported
    pub fn lexical_errors(&self) -> Vec<&LexicalError> {
        self.entries
            .iter()
            .filter_map(|d| match d {
                Diagnostic::Lexical(err) => Some(err),
                _ => None,
            })
            .collect()
    }

    /// Names of the assigned identifiers, in the order they were confirmed
    pub fn assignments(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|d| match d {
                Diagnostic::Assignment { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every entry rendered the way the console reporter would print it
    pub fn get_output(&self) -> Vec<String> {
        self.entries.iter().map(|d| d.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Reporter for DiagnosticLog {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}
