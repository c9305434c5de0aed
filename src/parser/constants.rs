// Language constants for MiniLang

/// Marker that turns a whole line into a comment when it starts the trimmed line
pub const COMMENT_MARKER: &str = "//";

/// Reserved words. Identifier-shaped lexemes in this list are keywords.
pub const KEYWORDS: [&str; 5] = ["if", "else", "print", "true", "false"];

/// Words that spell a boolean value
pub const BOOLEAN_WORDS: [&str; 2] = ["true", "false"];

/// Every lexeme classified as an operator
pub const OPERATORS: [&str; 9] = ["+", "-", "*", "/", "=", "==", "!=", "(", ")"];

/// Every lexeme classified as punctuation
pub const PUNCTUATION: [&str; 1] = [":"];

/// Deepest nesting of parentheses and `if` statements the parser will follow
pub const MAX_NESTING_DEPTH: usize = 256;
