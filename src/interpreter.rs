/// The evaluator module runs the scan-and-fold loop and computes results.
///
/// The evaluator consumes tokens directly from the lexer, folds operators by
/// precedence over two stacks, manages variable state, and produces the
/// final value. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Drives the single left-to-right scan over an expression.
/// - Folds pending operators on precedence, closing parentheses, and end of
///   input.
/// - Reports errors such as division by zero or unbalanced parentheses.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the stripped expression and produces a stream of tokens,
/// each corresponding to a meaningful element: numbers, identifiers,
/// operators, and parentheses. Tokens are consumed by the evaluator as they
/// are produced; the stream is never materialized.
///
/// # Responsibilities
/// - Converts the character stream into typed tokens with parsed payloads.
/// - Strips space characters ahead of scanning.
/// - Classifies unrecognized input into the matching error kind.
pub mod lexer;
/// The variables module stores bindings and defines the resolution seam.
///
/// A variable store maps names to numeric values for the lifetime of an
/// evaluator instance. Unbound names are resolved through the `Resolver`
/// trait the first time they are seen and cached afterwards.
///
/// # Responsibilities
/// - Defines the `Resolver` trait for external value sources.
/// - Caches resolved values keyed by exact, case-sensitive name.
/// - Supports explicit pre-seeding that bypasses resolution.
pub mod variables;
