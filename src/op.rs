use crate::error::RuntimeError;

/// Represents a binary operator.
///
/// These are the four operators the scanner recognizes. Additive operators
/// bind less tightly than multiplicative ones, and operators of equal
/// precedence fold left to right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the operator's precedence; a higher number binds tighter.
    ///
    /// `+` and `-` have precedence 1, `*` and `/` have precedence 2.
    ///
    /// # Example
    /// ```
    /// use numera::op::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(),
    ///            BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division checks the right operand against exactly `0.0` before
    /// dividing (IEEE equality, so `-0.0` is caught as well); everything
    /// else is plain `f64` arithmetic.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value, or `RuntimeError::DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use numera::op::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.apply(1.5, 2.0).unwrap(), 3.0);
    /// assert!(BinaryOperator::Div.apply(6.0, 0.0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
