#[derive(Debug)]
/// Represents all errors that can occur while folding operators.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// An operator-stack entry was not one of the four operators.
    ///
    /// The scanner only produces the four operator tokens, so the one way to
    /// reach this is an open parenthesis still pending when end-of-input
    /// folding begins, i.e. an unclosed `(`.
    UnknownOperator {
        /// The offending stack entry, rendered as its source symbol.
        symbol: char,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::UnknownOperator { symbol } => write!(f, "Invalid operator: {symbol}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
