//! Scanner (tokenizer) for MiniLang source code
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser. Input is processed one physical line at a time. A line whose
//! trimmed text starts with `//` is discarded whole.
//!
//! Lexemes are cut from a line first and classified second. Extraction knows
//! four shapes: a digit run, an identifier-shaped word, the two-character
//! operators `==`/`!=`, and any other single non-whitespace character.
//! Classification then tries, in order: keyword, integer literal, boolean
//! literal, identifier, operator, punctuation. A lexeme that matches none of
//! them is reported to the [`Reporter`] and dropped; scanning carries on.
//!
//! Because `true` and `false` are in the keyword set, step one always claims
//! them and the boolean-literal step never fires. The order is kept as is.

use super::constants::{BOOLEAN_WORDS, COMMENT_MARKER, KEYWORDS, OPERATORS, PUNCTUATION};
use crate::diagnostics::{Diagnostic, Reporter};
use rustc_hash::FxHashSet;
use std::fmt;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    IntegerLiteral,
    BooleanLiteral,
    Identifier,
    Operator,
    Punctuation,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed payload of a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// Lexeme text (keywords, identifiers, operators, punctuation)
    Text(String),
    /// Decimal digits with leading zeros removed. Any length is accepted.
    Integer(String),
    Boolean(bool),
}

impl TokenValue {
    /// Integer payload as an `i64`, when it fits
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TokenValue::Integer(digits) => digits.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::Integer(digits) => f.write_str(digits),
            TokenValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A classified lexeme. Tokens are never mutated after the scanner builds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, location: SourceLocation) -> Self {
        Self {
            kind,
            value,
            location,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Lexeme text for text-valued tokens
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True if this token has the given kind and exact lexeme
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.text() == Some(lexeme)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.is(TokenKind::Keyword, word)
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.is(TokenKind::Operator, op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

/// Non-fatal scanner diagnostics. The offending lexeme is always dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("Line {}, unrecognized token '{lexeme}'", .location.line)]
    Unrecognized {
        lexeme: String,
        location: SourceLocation,
    },
}

impl LexicalError {
    pub fn lexeme(&self) -> &str {
        match self {
            LexicalError::Unrecognized { lexeme, .. } => lexeme,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            LexicalError::Unrecognized { location, .. } => *location,
        }
    }
}

/// Canonical decimal text of a digit run: `007` becomes `7`, `000` becomes `0`
fn canonical_digits(lexeme: &str) -> String {
    let trimmed = lexeme.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// True if the whole line is a comment
pub fn is_comment_line(line: &str) -> bool {
    line.trim().starts_with(COMMENT_MARKER)
}

/// Scanner for MiniLang source code
pub struct Scanner<'src> {
    source: &'src str,
    keywords: FxHashSet<&'static str>,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source string.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            keywords: KEYWORDS.iter().copied().collect(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Unclassifiable lexemes are sent to `reporter` as they are found and
    /// left out of the result. Calling this twice yields identical output.
    pub fn tokenize(&self, reporter: &mut dyn Reporter) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (index, line) in self.source.lines().enumerate() {
            let line_number = index + 1;
            if is_comment_line(line) {
                tracing::debug!(line = line_number, "skipping comment line");
                continue;
            }

            let before = tokens.len();
            for (lexeme, column) in LineLexer::new(line) {
                let location = SourceLocation::new(line_number, column);
                match self.classify(&lexeme, location) {
                    Ok(token) => tokens.push(token),
                    Err(err) => {
                        tracing::debug!(%err, "dropping lexeme");
                        reporter.report(Diagnostic::Lexical(err));
                    }
                }
            }
            tracing::trace!(
                line = line_number,
                count = tokens.len() - before,
                "scanned line"
            );
        }

        tracing::debug!(count = tokens.len(), "scanning finished");
        tokens
    }

    /// Classify a single lexeme.
    ///
    /// The result depends only on `lexeme`; `location` is copied into the
    /// token or error untouched.
    pub fn classify(&self, lexeme: &str, location: SourceLocation) -> Result<Token, LexicalError> {
        if self.keywords.contains(lexeme) {
            return Ok(Token::new(
                TokenKind::Keyword,
                TokenValue::Text(lexeme.to_string()),
                location,
            ));
        }

        if !lexeme.is_empty() && lexeme.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Token::new(
                TokenKind::IntegerLiteral,
                TokenValue::Integer(canonical_digits(lexeme)),
                location,
            ));
        }

        // Unreachable while `true`/`false` are keywords; kept to preserve the check order.
        if BOOLEAN_WORDS.contains(&lexeme) {
            return Ok(Token::new(
                TokenKind::BooleanLiteral,
                TokenValue::Boolean(lexeme == "true"),
                location,
            ));
        }

        if !lexeme.is_empty() && lexeme.chars().all(char::is_alphabetic) {
            return Ok(Token::new(
                TokenKind::Identifier,
                TokenValue::Text(lexeme.to_string()),
                location,
            ));
        }

        if OPERATORS.contains(&lexeme) {
            return Ok(Token::new(
                TokenKind::Operator,
                TokenValue::Text(lexeme.to_string()),
                location,
            ));
        }

        if PUNCTUATION.contains(&lexeme) {
            return Ok(Token::new(
                TokenKind::Punctuation,
                TokenValue::Text(lexeme.to_string()),
                location,
            ));
        }

        Err(LexicalError::Unrecognized {
            lexeme: lexeme.to_string(),
            location,
        })
    }
}

/// Cuts one source line into `(lexeme, column)` pairs
struct LineLexer {
    input: Vec<char>,
    position: usize,
}

impl LineLexer {
    fn new(line: &str) -> Self {
        Self {
            input: line.chars().collect(),
            position: 0,
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consume characters while `pred` holds, appending them to `lexeme`
    fn take_while(&mut self, lexeme: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            lexeme.push(ch);
            self.advance();
        }
    }
}

impl Iterator for LineLexer {
    type Item = (String, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let column = self.position + 1;
        let first = self.advance()?;
        let mut lexeme = String::from(first);

        match first {
            '0'..='9' => self.take_while(&mut lexeme, |c| c.is_ascii_digit()),
            'a'..='z' | 'A'..='Z' => self.take_while(&mut lexeme, |c| c.is_ascii_alphanumeric()),
            '=' | '!' if self.peek() == Some('=') => {
                lexeme.push('=');
                self.advance();
            }
            _ => {}
        }

        Some((lexeme, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticLog;

    fn scan(source: &str) -> (Vec<Token>, DiagnosticLog) {
        let mut log = DiagnosticLog::new();
        let tokens = Scanner::new(source).tokenize(&mut log);
        (tokens, log)
    }

    fn rendered(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_simple_assignment() {
        let (tokens, log) = scan("x = 1 + 2");

        assert_eq!(
            rendered(&tokens),
            vec![
                "IDENTIFIER: x",
                "OPERATOR: =",
                "INTEGER_LITERAL: 1",
                "OPERATOR: +",
                "INTEGER_LITERAL: 2",
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_keywords_win_over_booleans() {
        let (tokens, _) = scan("if else print true false");

        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Keyword));
        assert_eq!(tokens[3].text(), Some("true"));
        assert_eq!(tokens[4].text(), Some("false"));
    }

    #[test]
    fn test_two_char_operators() {
        let (tokens, log) = scan("a==b != c=d");

        assert_eq!(
            rendered(&tokens),
            vec![
                "IDENTIFIER: a",
                "OPERATOR: ==",
                "IDENTIFIER: b",
                "OPERATOR: !=",
                "IDENTIFIER: c",
                "OPERATOR: =",
                "IDENTIFIER: d",
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_comment_line_discarded_whole() {
        let (tokens, log) = scan("  // x = @ 1\nprint 1 // trailing");

        // only the full-line comment is skipped; the trailing `//` is two slashes
        assert_eq!(
            rendered(&tokens),
            vec![
                "KEYWORD: print",
                "INTEGER_LITERAL: 1",
                "OPERATOR: /",
                "OPERATOR: /",
                "IDENTIFIER: trailing",
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_unrecognized_lexeme_dropped() {
        let (tokens, log) = scan("x = @\ny = 2 $");

        assert_eq!(
            rendered(&tokens),
            vec![
                "IDENTIFIER: x",
                "OPERATOR: =",
                "IDENTIFIER: y",
                "OPERATOR: =",
                "INTEGER_LITERAL: 2",
            ]
        );
        assert_eq!(
            log.get_output(),
            vec![
                "Lexical Error: Line 1, unrecognized token '@'",
                "Lexical Error: Line 2, unrecognized token '$'",
            ]
        );
    }

    #[test]
    fn test_alphanumeric_word_is_not_identifier() {
        let (tokens, log) = scan("x1 = 3");

        assert_eq!(rendered(&tokens), vec!["OPERATOR: =", "INTEGER_LITERAL: 3"]);
        assert_eq!(log.lexical_errors()[0].lexeme(), "x1");
    }

    #[test]
    fn test_colon_is_punctuation() {
        let (tokens, _) = scan("if x : print 1");

        assert_eq!(tokens[2].kind(), TokenKind::Punctuation);
        assert_eq!(tokens[2].text(), Some(":"));
    }

    #[test]
    fn test_integer_value_parsed() {
        let (tokens, _) = scan("007");

        assert_eq!(tokens[0].value(), &TokenValue::Integer("7".to_string()));
        assert_eq!(tokens[0].value().as_i64(), Some(7));
        assert_eq!(tokens[0].to_string(), "INTEGER_LITERAL: 7");
    }

    #[test]
    fn test_all_zero_literal() {
        let (tokens, _) = scan("000");

        assert_eq!(tokens[0].to_string(), "INTEGER_LITERAL: 0");
    }

    #[test]
    fn test_integer_wider_than_i64() {
        let (tokens, log) = scan("x = 99999999999999999999");

        assert!(log.is_empty());
        assert_eq!(
            rendered(&tokens),
            vec![
                "IDENTIFIER: x",
                "OPERATOR: =",
                "INTEGER_LITERAL: 99999999999999999999",
            ]
        );
        assert_eq!(tokens[2].value().as_i64(), None);
    }

    #[test]
    fn test_digits_then_letters_split() {
        let (tokens, _) = scan("12abc");

        assert_eq!(rendered(&tokens), vec!["INTEGER_LITERAL: 12", "IDENTIFIER: abc"]);
    }

    #[test]
    fn test_locations() {
        let (tokens, _) = scan("\n   total = (a)");

        assert_eq!(tokens[0].location(), SourceLocation::new(2, 4));
        assert_eq!(tokens[1].location(), SourceLocation::new(2, 10));
        assert_eq!(tokens[2].location(), SourceLocation::new(2, 12));
        assert_eq!(tokens[4].location(), SourceLocation::new(2, 14));
    }

    #[test]
    fn test_classification_ignores_location() {
        let scanner = Scanner::new("");
        let a = scanner.classify("print", SourceLocation::new(1, 1)).unwrap();
        let b = scanner.classify("print", SourceLocation::new(9, 40)).unwrap();

        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_boolean_branch_unreachable() {
        let (tokens, _) = scan("true false");

        assert!(tokens.iter().all(|t| t.kind() != TokenKind::BooleanLiteral));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let source = "x = 1\n// c\nif x : print @ 2";
        let scanner = Scanner::new(source);
        let mut first_log = DiagnosticLog::new();
        let mut second_log = DiagnosticLog::new();

        let first = scanner.tokenize(&mut first_log);
        let second = scanner.tokenize(&mut second_log);

        assert_eq!(first, second);
        assert_eq!(first_log.entries, second_log.entries);
    }

    #[test]
    fn test_empty_source() {
        let (tokens, log) = scan("");

        assert!(tokens.is_empty());
        assert!(log.is_empty());
    }
}
