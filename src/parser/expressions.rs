//! Expression parsing implementation
//!
//! ```text
//! Expression → Term (('+' | '-') Term)*
//! Term       → Factor (('*' | '/') Factor)*
//! Factor     → '(' Expression ')' | IDENTIFIER | INTEGER_LITERAL | BOOLEAN_LITERAL
//! ```
//!
//! Expressions are only checked for shape, never evaluated. `==` and `!=`
//! are valid tokens but no rule here consumes them, so they end an
//! expression and are left for the caller to reject.

use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{Expected, Parser, SyntaxError, SyntaxErrorKind};

/// Boolean literal, or one of the keywords that spell one
fn is_boolean(token: &Token) -> bool {
    token.kind() == TokenKind::BooleanLiteral
        || token.is_keyword("true")
        || token.is_keyword("false")
}

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        tracing::trace!(position = self.position, "expression");
        self.parse_term()?;

        while self.check_operator("+") || self.check_operator("-") {
            self.advance();
            self.parse_term()?;
        }

        Ok(())
    }

    /// Parse term: multiplicative operators
    fn parse_term(&mut self) -> Result<(), SyntaxError> {
        self.parse_factor()?;

        while self.check_operator("*") || self.check_operator("/") {
            self.advance();
            self.parse_factor()?;
        }

        Ok(())
    }

    /// Parse factor: parenthesized expression, identifier, or literal
    fn parse_factor(&mut self) -> Result<(), SyntaxError> {
        let Some(token) = self.peek() else {
            return Err(self.mismatch(Expected::Factor));
        };

        if token.is_operator("(") {
            return self.nested(|parser| {
                parser.advance();
                parser.parse_expression()?;
                parser.expect_operator(")")
            });
        }

        match token.kind() {
            TokenKind::Identifier | TokenKind::IntegerLiteral => {
                self.advance();
                Ok(())
            }
            _ if is_boolean(token) => {
                self.advance();
                Ok(())
            }
            kind => Err(self.error(SyntaxErrorKind::UnexpectedInFactor(kind))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::DiagnosticLog;
    use crate::parser::constants::MAX_NESTING_DEPTH;
    use crate::parser::lexer::{Scanner, TokenKind};
    use crate::parser::parse::{Expected, Found, Parser, SyntaxError, SyntaxErrorKind};

    fn parse(source: &str) -> Result<(), SyntaxError> {
        let mut log = DiagnosticLog::new();
        let tokens = Scanner::new(source).tokenize(&mut log);
        Parser::new(&tokens, &mut log).parse_program()
    }

    #[test]
    fn test_precedence_chain() {
        assert!(parse("x = a + b * c - d / (e + 1)").is_ok());
    }

    #[test]
    fn test_nested_parentheses() {
        assert!(parse("x = ((((1))))").is_ok());
    }

    #[test]
    fn test_boolean_factor() {
        assert!(parse("flag = false").is_ok());
        assert!(parse("print true + 1").is_ok());
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let err = parse("x = (1 + 2").unwrap_err();

        assert_eq!(
            err.kind,
            SyntaxErrorKind::Mismatch {
                expected: Expected::Lexeme(")"),
                found: Found::EndOfInput,
            }
        );
        assert_eq!(err.to_string(), "Expected ) but found end of input");
    }

    #[test]
    fn test_dangling_operator() {
        let err = parse("x = 1 +").unwrap_err();

        assert_eq!(err.to_string(), "Expected factor but found end of input");
    }

    #[test]
    fn test_keyword_in_factor() {
        let err = parse("x = print").unwrap_err();

        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedInFactor(TokenKind::Keyword)
        );
    }

    #[test]
    fn test_operator_in_factor() {
        let err = parse("x = * 2").unwrap_err();

        assert_eq!(err.to_string(), "Unexpected token OPERATOR in factor");
        assert_eq!(err.location.map(|l| l.column), Some(5));
    }

    #[test]
    fn test_parentheses_at_nesting_limit() {
        let depth = MAX_NESTING_DEPTH;
        let source = format!("x = {}1{}", "(".repeat(depth), ")".repeat(depth));

        assert!(parse(&source).is_ok());
    }

    #[test]
    fn test_parentheses_too_deep() {
        let depth = 20_000;
        let source = format!("x = {}1{}", "(".repeat(depth), ")".repeat(depth));
        let err = parse(&source).unwrap_err();

        assert_eq!(err.kind, SyntaxErrorKind::NestingTooDeep(MAX_NESTING_DEPTH));
        // `x`, `=`, then every open parenthesis up to the limit
        assert_eq!(err.position, 2 + MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_comparison_is_not_consumed() {
        let err = parse("x = 1 == 2").unwrap_err();

        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedInStatement(TokenKind::Operator)
        );
        assert_eq!(err.position, 3);
    }
}
