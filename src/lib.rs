//! # Introduction
//!
//! MiniLang is a tiny teaching language with assignments, `print`, and
//! `if`/`else`. This crate scans MiniLang source and checks it against the
//! grammar by recursive descent. Nothing is evaluated and no syntax tree is
//! kept.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Tokens → Parser → accept / SyntaxError
//! ```
//!
//! 1. [`parser::lexer`]: splits lines into lexemes and classifies them.
//!    Lexemes it cannot classify are reported and dropped.
//! 2. [`parser::parse`]: walks the grammar and stops at the first violation
//!    with a [`parser::parse::SyntaxError`].
//! 3. [`diagnostics`]: the [`diagnostics::Reporter`] sink both stages write
//!    lexical errors and assignment confirmations to.
//! 4. [`ui`]: ratatui-based token viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use minilang::diagnostics::DiagnosticLog;
//! use minilang::parser::{lexer::Scanner, parse::Parser};
//!
//! let mut log = DiagnosticLog::new();
//! let tokens = Scanner::new("x = 1 + 2").tokenize(&mut log);
//! Parser::new(&tokens, &mut log).parse_program().unwrap();
//! assert_eq!(log.assignments(), vec!["x"]);
//! ```

pub mod diagnostics;
pub mod parser;
pub mod ui;
