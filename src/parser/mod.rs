//! MiniLang front end
//!
//! This module turns MiniLang source text into a verdict:
//! - [`lexer`]: Scanning (source text → tokens, lexical diagnostics)
//! - [`parse`]: The [`Parser`](parse::Parser) recognizer and its error types
//! - [`constants`]: Keyword, operator and punctuation tables
//!
//! # Language
//!
//! Assignments (`x = 1 + 2`), `print` statements, and `if cond : ... else : ...`
//! over integer, boolean and identifier operands with `+ - * /` and
//! parentheses. Full-line `//` comments.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent. The parser only accepts or rejects; it
//! does not build a syntax tree.

pub mod constants;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
