//! # numera
//!
//! numera is an arithmetic expression evaluator written in Rust.
//! It scans and evaluates infix expressions containing numeric literals,
//! named variables, the operators `+`, `-`, `*` and `/`, and parentheses,
//! resolving unknown variables through a pluggable value source.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{evaluator::Evaluator, variables::Resolver},
};

/// Provides unified error types for scanning and evaluation.
///
/// This module defines all errors that can be raised while scanning or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds and
/// human-readable messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, folder).
/// - Unifies both families into the single [`error::EvalError`] type carried
///   across the public boundary.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, the scan-and-fold loop, variable
/// storage, and resolution of unknown variables to provide a complete
/// evaluator for arithmetic expressions. It exposes the public API for
/// evaluating expression strings.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, evaluator, and variable store.
/// - Provides the entry points for evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines the binary operators of the expression language.
///
/// This module declares the operator type shared by the lexer and the
/// evaluator, together with its precedence table and application rules.
///
/// # Responsibilities
/// - Defines the `BinaryOperator` enum for `+`, `-`, `*` and `/`.
/// - Assigns each operator its precedence.
/// - Applies an operator to two operands, checking division by zero.
pub mod op;

/// Evaluates a single expression with a one-shot evaluator.
///
/// This convenience function constructs an [`Evaluator`] around the given
/// resolver, evaluates the expression, and returns the result. Variables
/// resolved along the way are discarded with the evaluator; use an
/// [`Evaluator`] directly to keep bindings across several expressions.
///
/// # Errors
/// Returns an error if the expression is empty, contains invalid characters
/// or literals, is structurally malformed, or divides by zero.
///
/// # Examples
/// ```
/// use numera::evaluate_with;
///
/// let result = evaluate_with("2 + 3 * 5 - 6 / 2", |_: &str| 0.0);
/// assert_eq!(result.unwrap(), 14.0);
///
/// // Unknown variables are resolved through the supplied value source.
/// let result = evaluate_with("price * 3", |_: &str| 2.5);
/// assert_eq!(result.unwrap(), 7.5);
/// ```
pub fn evaluate_with<R: Resolver>(expression: &str, resolver: R) -> Result<f64, EvalError> {
    Evaluator::new(resolver).evaluate(expression)
}
