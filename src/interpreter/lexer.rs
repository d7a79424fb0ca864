use logos::Logos;

use crate::{error::ParseError, op::BinaryOperator};

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in an expression.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens such as `42`, `3.14` or `.5`.
    ///
    /// The pattern consumes the maximal run of digits and decimal points; a
    /// run that does not parse as an `f64` (such as `1.2.3`) becomes a lexer
    /// error and is reported as [`ParseError::InvalidNumber`].
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Variable name tokens; maximal runs of ASCII letters, case-sensitive.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Operator tokens: `+`, `-`, `*` and `/`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Removes all space characters from an expression.
///
/// Only U+0020 is removed; any other whitespace (tabs, newlines) survives
/// stripping and is later rejected by the scanner as an invalid character.
/// The relative order of the remaining characters is preserved.
///
/// # Example
/// ```
/// use numera::interpreter::lexer::strip_spaces;
///
/// assert_eq!(strip_spaces("  2 +  3 "), "2+3");
/// assert_eq!(strip_spaces("1 2"), "12");
/// ```
#[must_use]
pub fn strip_spaces(expression: &str) -> String {
    expression.chars().filter(|&c| c != ' ').collect()
}

/// Classifies the slice of a failed lexer step into a parse error.
///
/// A slice beginning with a digit or a decimal point is a numeric run that
/// failed to parse; anything else is a character outside the expression
/// alphabet. An empty slice reports `MalformedExpression`.
///
/// # Example
/// ```
/// use numera::{error::ParseError, interpreter::lexer::classify_lex_error};
///
/// assert!(matches!(classify_lex_error("1.2.3"),
///                  ParseError::InvalidNumber { .. }));
/// assert!(matches!(classify_lex_error("?"),
///                  ParseError::InvalidCharacter { found: '?' }));
/// ```
#[must_use]
pub fn classify_lex_error(slice: &str) -> ParseError {
    if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return ParseError::InvalidNumber { literal: slice.to_string() };
    }

    match slice.chars().next() {
        Some(found) => ParseError::InvalidCharacter { found },
        None => ParseError::MalformedExpression,
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If the run of digits and decimal points is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
