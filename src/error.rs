/// Scan errors.
///
/// Defines all error types that can occur while scanning an expression.
/// Scan errors cover empty input, characters outside the expression
/// alphabet, unparseable numeric literals, and structural problems detected
/// by the fold loop.
pub mod parse_error;
/// Fold errors.
///
/// Contains all error types that can be raised while applying operators to
/// operands, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The error type returned by expression evaluation.
///
/// Scanning and folding happen in a single pass, so one `evaluate` call can
/// fail either way; this enum carries both families across the public
/// boundary as one typed failure. Its message text is that of the inner
/// error.
pub enum EvalError {
    /// The expression text was not well formed.
    Parse(ParseError),
    /// Applying an operator to its operands failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
