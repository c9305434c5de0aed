//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, cursor helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recognizer: it walks the grammar by recursive descent and
//! consumes tokens as rules match, but builds no tree.
//! - This module: Parser struct, cursor helpers, and coordination
//! - `statements`: Program bodies and statement dispatch
//! - `expressions`: Expression / Term / Factor
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared cursor.
//!
//! # Failure
//!
//! The first violation ends the parse. There is no recovery; every rule
//! propagates the [`SyntaxError`] with `?`, and no token after the offending
//! one is looked at.

use crate::diagnostics::Reporter;
use crate::parser::constants::MAX_NESTING_DEPTH;
use crate::parser::lexer::{SourceLocation, Token, TokenKind};
use std::fmt;

/// What a failed match was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Any token of this kind
    Kind(TokenKind),
    /// A token with exactly this lexeme (`=`, `(`, `)`, `:`, `if`, ...)
    Lexeme(&'static str),
    /// The start of a factor
    Factor,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Lexeme(lexeme) => write!(f, "{}", lexeme),
            Expected::Factor => write!(f, "factor"),
        }
    }
}

/// What the parser saw instead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token(TokenKind),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(kind) => write!(f, "{}", kind),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// The grammar violation behind a [`SyntaxError`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("Expected {expected} but found {found}")]
    Mismatch { expected: Expected, found: Found },

    #[error("Unexpected token {0} in statement")]
    UnexpectedInStatement(TokenKind),

    #[error("Unexpected token {0} in factor")]
    UnexpectedInFactor(TokenKind),

    #[error("Nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Parser error type.
///
/// `Display` prints the message alone; the position lives in the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Index of the offending token (`tokens.len()` at end of input)
    pub position: usize,
    /// `None` when the input ran out
    pub location: Option<SourceLocation>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for SyntaxError {}

/// Recursive descent recognizer for MiniLang
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
    pub(crate) reporter: &'a mut dyn Reporter,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], reporter: &'a mut dyn Reporter) -> Self {
        Self {
            tokens,
            position: 0,
            reporter,
            depth: 0,
        }
    }

    /// Parse the entire token sequence as a Program.
    ///
    /// Statements are parsed for as long as tokens remain, so a leftover
    /// token that cannot start a statement is rejected here.
    pub fn parse_program(&mut self) -> Result<(), SyntaxError> {
        tracing::trace!(count = self.tokens.len(), "parsing program");

        while !self.is_at_end() {
            self.parse_statement()?;
        }

        tracing::debug!(consumed = self.position, "program accepted");
        Ok(())
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        tracing::trace!(position = self.position, %token, "consume");
        self.position += 1;
        Some(token)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind() == kind)
    }

    pub(crate) fn check_keyword(&self, word: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(word))
    }

    pub(crate) fn check_operator(&self, op: &str) -> bool {
        self.peek().is_some_and(|t| t.is_operator(op))
    }

    /// What the cursor currently points at, for error messages
    pub(crate) fn found(&self) -> Found {
        match self.peek() {
            Some(token) => Found::Token(token.kind()),
            None => Found::EndOfInput,
        }
    }

    /// Build an error pinned to the current token
    pub(crate) fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            kind,
            position: self.position,
            location: self.peek().map(Token::location),
        }
    }

    pub(crate) fn mismatch(&self, expected: Expected) -> SyntaxError {
        self.error(SyntaxErrorKind::Mismatch {
            expected,
            found: self.found(),
        })
    }

    /// Consume a token of the given kind
    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> Result<&'a Token, SyntaxError> {
        if self.check_kind(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.mismatch(Expected::Kind(kind)))
    }

    /// Consume a token with exactly this kind and lexeme
    pub(crate) fn expect_lexeme(
        &mut self,
        kind: TokenKind,
        lexeme: &'static str,
    ) -> Result<(), SyntaxError> {
        if self.peek().is_some_and(|t| t.is(kind, lexeme)) {
            self.advance();
            Ok(())
        } else {
            Err(self.mismatch(Expected::Lexeme(lexeme)))
        }
    }

    pub(crate) fn expect_keyword(&mut self, word: &'static str) -> Result<(), SyntaxError> {
        self.expect_lexeme(TokenKind::Keyword, word)
    }

    pub(crate) fn expect_operator(&mut self, op: &'static str) -> Result<(), SyntaxError> {
        self.expect_lexeme(TokenKind::Operator, op)
    }

    pub(crate) fn expect_colon(&mut self) -> Result<(), SyntaxError> {
        self.expect_lexeme(TokenKind::Punctuation, ":")
    }

    /// Run a recursive rule one nesting level deeper.
    ///
    /// Fails without recursing once [`MAX_NESTING_DEPTH`] levels are open.
    pub(crate) fn nested(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<(), SyntaxError>,
    ) -> Result<(), SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(SyntaxErrorKind::NestingTooDeep(MAX_NESTING_DEPTH)));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

/// Scan-free entry point: recognize an already tokenized program.
pub fn parse(tokens: &[Token], reporter: &mut dyn Reporter) -> Result<(), SyntaxError> {
    Parser::new(tokens, reporter).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticLog;
    use crate::parser::lexer::Scanner;

    fn run(source: &str) -> (Result<(), SyntaxError>, DiagnosticLog, usize) {
        let mut log = DiagnosticLog::new();
        let tokens = Scanner::new(source).tokenize(&mut log);
        let mut parser = Parser::new(&tokens, &mut log);
        let result = parser.parse_program();
        let consumed = parser.position();
        (result, log, consumed)
    }

    #[test]
    fn test_parse_assignment() {
        let (result, log, consumed) = run("x = 1 + 2");

        assert!(result.is_ok());
        assert_eq!(log.assignments(), vec!["x"]);
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_empty_program() {
        let (result, log, consumed) = run("");

        assert!(result.is_ok());
        assert!(log.is_empty());
        assert_eq!(consumed, 0);
    }

    #[test]
    fn test_missing_expression_at_end() {
        let (result, _, _) = run("x =");
        let err = result.unwrap_err();

        assert_eq!(
            err.kind,
            SyntaxErrorKind::Mismatch {
                expected: Expected::Factor,
                found: Found::EndOfInput,
            }
        );
        assert_eq!(err.position, 2);
        assert_eq!(err.location, None);
        assert_eq!(err.to_string(), "Expected factor but found end of input");
    }

    #[test]
    fn test_literal_cannot_start_statement() {
        let (result, _, consumed) = run("1 2");
        let err = result.unwrap_err();

        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedInStatement(TokenKind::IntegerLiteral)
        );
        assert_eq!(consumed, 0);
        assert_eq!(err.to_string(), "Unexpected token INTEGER_LITERAL in statement");
        assert_eq!(err.location, Some(SourceLocation::new(1, 1)));
    }

    #[test]
    fn test_expected_lexeme_message() {
        let (result, _, _) = run("x 1");
        let err = result.unwrap_err();

        assert_eq!(err.to_string(), "Expected = but found INTEGER_LITERAL");
        assert_eq!(err.position, 1);
        assert_eq!(err.location, Some(SourceLocation::new(1, 3)));
    }

    #[test]
    fn test_stops_at_first_error() {
        let (result, log, consumed) = run("a = 1\nb = )\nc = 2");

        assert!(result.is_err());
        // `c` is never reached
        assert_eq!(log.assignments(), vec!["a"]);
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_free_parse_function() {
        let mut log = DiagnosticLog::new();
        let tokens = Scanner::new("print (1)").tokenize(&mut log);

        assert!(parse(&tokens, &mut log).is_ok());
    }
}
