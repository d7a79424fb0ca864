use logos::Logos;

use crate::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        lexer::{Token, classify_lex_error, strip_spaces},
        variables::{Resolver, VariableStore},
    },
    op::BinaryOperator,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry on the pending-operator stack.
///
/// Operators wait here until a lower-or-equal-precedence operator, a closing
/// parenthesis, or the end of input folds them into the operand stack. An
/// open parenthesis is pushed as a barrier that stops folding until its
/// matching `)` arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// A binary operator waiting to be folded.
    Operator(BinaryOperator),
    /// The precedence barrier pushed for `(`.
    OpenParen,
}

/// Evaluates arithmetic expressions against a variable store.
///
/// This struct holds the evaluator state: the variable bindings and the
/// resolver consulted for unbound names. It converts an infix expression
/// directly into a numeric result in a single left-to-right scan over two
/// stacks, without building a syntax tree.
///
/// ## Usage
///
/// An `Evaluator` is created once and reused for evaluating expressions.
/// Variables resolved or pre-seeded during one `evaluate` call keep their
/// values for later calls on the same instance.
pub struct Evaluator<R> {
    store:    VariableStore,
    resolver: R,
}

impl<R: Resolver> Evaluator<R> {
    /// Creates a new evaluator with an empty variable store.
    ///
    /// # Parameters
    /// - `resolver`: Value source consulted for unbound variable names.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::evaluator::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new(|_: &str| 0.0);
    ///
    /// assert_eq!(evaluator.evaluate("1 + 1").unwrap(), 2.0);
    /// ```
    pub fn new(resolver: R) -> Self {
        Self { store: VariableStore::new(),
               resolver }
    }

    /// Evaluates an expression and returns its numeric value.
    ///
    /// Space characters are removed first; an expression that is empty after
    /// stripping is rejected before any token is produced. The stripped
    /// expression is then scanned once, left to right, folding operators by
    /// precedence as they arrive.
    ///
    /// # Parameters
    /// - `expression`: The raw expression text.
    ///
    /// # Returns
    /// The evaluated value.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::evaluator::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new(|name: &str| {
    ///     if name == "x" { 4.0 } else { 0.0 }
    /// });
    ///
    /// assert_eq!(evaluator.evaluate("(2 + 3) * 2").unwrap(), 10.0);
    /// assert_eq!(evaluator.evaluate("x * x").unwrap(), 16.0);
    /// ```
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        let expression = strip_spaces(expression);

        if expression.is_empty() {
            return Err(ParseError::EmptyExpression.into());
        }

        self.scan(&expression)
    }

    /// Binds a variable to a value, bypassing resolution for that name.
    ///
    /// An existing binding, whether pre-seeded or resolved, is overwritten.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to bind.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::evaluator::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new(|_: &str| 0.0);
    /// evaluator.set_variable("x", 10.0);
    ///
    /// assert_eq!(evaluator.evaluate("x + 5").unwrap(), 15.0);
    /// ```
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.store.set(name, value);
    }

    /// Returns the variable bindings held by this evaluator.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::evaluator::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new(|_: &str| 3.0);
    /// evaluator.evaluate("a + 1").unwrap();
    ///
    /// assert_eq!(evaluator.variables().get("a"), Some(3.0));
    /// ```
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.store
    }

    /// Runs the single left-to-right scan over a stripped expression.
    ///
    /// Numbers and resolved variables go onto the operand stack; operators
    /// and `(` barriers go onto the pending stack and are folded on
    /// precedence, closing parentheses, and end of input. The sole operand
    /// remaining afterwards is the result.
    fn scan(&mut self, expression: &str) -> EvalResult<f64> {
        let Self { store, resolver } = self;

        // Each scanned character contributes at most one entry to either
        // stack, so the input length bounds both.
        let mut values: Vec<f64> = Vec::with_capacity(expression.len());
        let mut pending: Vec<Pending> = Vec::with_capacity(expression.len());

        let mut lexer = Token::lexer(expression);

        while let Some(token) = lexer.next() {
            let Ok(token) = token else {
                return Err(classify_lex_error(lexer.slice()).into());
            };

            match token {
                Token::Number(number) => values.push(number),

                Token::Identifier(name) => {
                    values.push(store.get_or_resolve(&name, resolver));
                },

                Token::LParen => pending.push(Pending::OpenParen),

                Token::RParen => loop {
                    match pending.pop() {
                        Some(Pending::OpenParen) => break,
                        Some(Pending::Operator(op)) => fold_once(&mut values, op)?,
                        None => return Err(ParseError::UnbalancedParenthesis.into()),
                    }
                },

                Token::Operator(incoming) => {
                    while let Some(Pending::Operator(top)) = pending.last().copied() {
                        if top.precedence() < incoming.precedence() {
                            break;
                        }
                        pending.pop();
                        fold_once(&mut values, top)?;
                    }
                    pending.push(Pending::Operator(incoming));
                },
            }
        }

        while let Some(entry) = pending.pop() {
            match entry {
                Pending::Operator(op) => fold_once(&mut values, op)?,
                Pending::OpenParen => {
                    return Err(RuntimeError::UnknownOperator { symbol: '(' }.into());
                },
            }
        }

        match values.as_slice() {
            [result] => Ok(*result),
            _ => Err(ParseError::MalformedExpression.into()),
        }
    }
}

/// Folds the topmost pending operator into the operand stack.
///
/// Pops the two topmost operands, applies the operator, and pushes the
/// result back as a single operand. Fewer than two available operands means
/// the expression ran out of values for its operators.
fn fold_once(values: &mut Vec<f64>, op: BinaryOperator) -> EvalResult<()> {
    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
        return Err(ParseError::MalformedExpression.into());
    };

    values.push(op.apply(left, right)?);
    Ok(())
}
