//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! Program        → Statement*
//! Statement      → Assignment | IfStatement | PrintStatement
//! Assignment     → IDENTIFIER '=' Expression
//! IfStatement    → 'if' Expression ':' Program ('else' ':' Program)?
//! PrintStatement → 'print' Expression
//! ```
//!
//! Dispatch looks at the current token only. A nested Program (the body of
//! an `if` or `else`) has no terminator of its own: it runs until the input
//! ends or the current token cannot start a statement. That is what lets
//! `else` close an if-body, and it also means statements following an
//! if-body without `else` belong to that body.

use crate::diagnostics::Diagnostic;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError, SyntaxErrorKind};

impl Parser<'_> {
    /// Whether the current token can begin a statement
    pub(crate) fn starts_statement(&self) -> bool {
        self.check_kind(TokenKind::Identifier)
            || self.check_keyword("if")
            || self.check_keyword("print")
    }

    /// Parse a nested Program (if/else body)
    pub(crate) fn parse_body(&mut self) -> Result<(), SyntaxError> {
        while self.starts_statement() {
            self.parse_statement()?;
        }
        Ok(())
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<(), SyntaxError> {
        let Some(token) = self.peek() else {
            return Ok(());
        };
        tracing::trace!(position = self.position, %token, "statement");

        if token.kind() == TokenKind::Identifier {
            self.parse_assignment()
        } else if token.is_keyword("if") {
            self.parse_if_statement()
        } else if token.is_keyword("print") {
            self.parse_print_statement()
        } else {
            Err(self.error(SyntaxErrorKind::UnexpectedInStatement(token.kind())))
        }
    }

    /// Parse assignment: IDENTIFIER '=' Expression
    fn parse_assignment(&mut self) -> Result<(), SyntaxError> {
        let target = self.expect_kind(TokenKind::Identifier)?;
        self.expect_operator("=")?;
        self.parse_expression()?;

        let name = target.text().unwrap_or_default().to_string();
        tracing::debug!(%name, "assignment recognized");
        self.reporter.report(Diagnostic::Assignment {
            name,
            location: target.location(),
        });
        Ok(())
    }

    /// Parse if statement: 'if' Expression ':' Program ('else' ':' Program)?
    fn parse_if_statement(&mut self) -> Result<(), SyntaxError> {
        self.nested(|parser| {
            parser.expect_keyword("if")?;
            parser.parse_expression()?;
            parser.expect_colon()?;
            parser.parse_body()?;

            if parser.check_keyword("else") {
                parser.expect_keyword("else")?;
                parser.expect_colon()?;
                parser.parse_body()?;
            }

            Ok(())
        })
    }

    /// Parse print statement: 'print' Expression
    fn parse_print_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword("print")?;
        self.parse_expression()
    }
}
