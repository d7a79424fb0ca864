use numera::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::evaluator::Evaluator,
};

fn eval(expression: &str) -> Result<f64, EvalError> {
    numera::evaluate_with(expression, |_: &str| 0.0)
}

fn assert_value(expression: &str, expected: f64) {
    match eval(expression) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-3,
                    "'{expression}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

#[test]
fn single_operator_expressions() {
    assert_value("2 + 3", 5.0);
    assert_value("5 - 3", 2.0);
    assert_value("2 * 3", 6.0);
    assert_value("6 / 3", 2.0);
    assert_value("7 / 2", 3.5);
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 5 - 6 / 2", 14.0);
    assert_value("1 + 2 * 3", 7.0);
    assert_value("10 - 4 / 2", 8.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 2", 10.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("((1 + 1) * (2 + 2))", 8.0);
    assert_value("(5)", 5.0);
}

#[test]
fn equal_precedence_folds_left_to_right() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("10 - 2 + 1", 9.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5 + 2.25", 3.75);
    assert_value(".5 * 4", 2.0);
    assert_value("5. / 2", 2.5);
}

#[test]
fn spaces_are_stripped_before_scanning() {
    assert_value("  2   +3 ", 5.0);
    // Only U+0020 is stripped, so digit runs separated by spaces join up.
    assert_value("1 2", 12.0);
    assert_value("1 2 + 3", 15.0);
}

#[test]
fn preseeded_variables_skip_resolution() {
    let mut evaluator = Evaluator::new(|name: &str| -> f64 {
        panic!("resolver called for '{name}'")
    });

    evaluator.set_variable("x", 10.0);

    assert_eq!(evaluator.evaluate("x").unwrap(), 10.0);
    assert_eq!(evaluator.evaluate("x + 5").unwrap(), 15.0);
}

#[test]
fn unbound_variables_resolve_once_per_name() {
    let mut calls = 0;

    {
        let mut evaluator = Evaluator::new(|_: &str| {
            calls += 1;
            7.0
        });

        assert_eq!(evaluator.evaluate("x + x").unwrap(), 14.0);
        assert_eq!(evaluator.evaluate("x * 2").unwrap(), 14.0);
    }

    assert_eq!(calls, 1);
}

#[test]
fn distinct_names_resolve_separately() {
    let mut evaluator = Evaluator::new(|name: &str| match name {
        "a" => 2.0,
        "b" => 3.0,
        _ => 0.0,
    });

    assert_eq!(evaluator.evaluate("a * b").unwrap(), 6.0);
    assert_eq!(evaluator.variables().get("a"), Some(2.0));
    assert_eq!(evaluator.variables().get("b"), Some(3.0));
}

#[test]
fn variable_names_are_case_sensitive() {
    let mut evaluator = Evaluator::new(|name: &str| {
        if name == "X" { 9.0 } else { 1.0 }
    });

    assert_eq!(evaluator.evaluate("X + x").unwrap(), 10.0);
}

#[test]
fn set_variable_overwrites_resolved_value() {
    let mut evaluator = Evaluator::new(|_: &str| 7.0);

    assert_eq!(evaluator.evaluate("x").unwrap(), 7.0);

    evaluator.set_variable("x", 1.0);
    assert_eq!(evaluator.evaluate("x").unwrap(), 1.0);
}

#[test]
fn evaluation_is_idempotent() {
    let mut evaluator = Evaluator::new(|_: &str| 5.0);

    let first = evaluator.evaluate("x * (2 + 1)").unwrap();
    let second = evaluator.evaluate("x * (2 + 1)").unwrap();

    assert_eq!(first, 15.0);
    assert_eq!(first, second);
}

#[test]
fn empty_expression_is_error() {
    assert!(matches!(eval(""), Err(EvalError::Parse(ParseError::EmptyExpression))));
    assert!(matches!(eval("   "), Err(EvalError::Parse(ParseError::EmptyExpression))));
}

#[test]
fn invalid_character_is_error() {
    assert!(matches!(eval("2 + 3 * ?"),
                     Err(EvalError::Parse(ParseError::InvalidCharacter { found: '?' }))));
    // Tabs are not stripped; they are rejected like any other stray byte.
    assert!(matches!(eval("2\t+ 3"),
                     Err(EvalError::Parse(ParseError::InvalidCharacter { found: '\t' }))));
    assert!(matches!(eval("x_1"),
                     Err(EvalError::Parse(ParseError::InvalidCharacter { found: '_' }))));
}

#[test]
fn invalid_number_is_error() {
    assert!(matches!(eval("1.2.3"),
                     Err(EvalError::Parse(ParseError::InvalidNumber { literal })) if literal == "1.2.3"));
    assert!(matches!(eval(". + 1"),
                     Err(EvalError::Parse(ParseError::InvalidNumber { .. }))));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(eval("6 / 0"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero))));
    assert!(matches!(eval("1 / (2 - 2)"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero))));
    assert!(matches!(eval("0 / 0"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero))));
}

#[test]
fn unbalanced_closing_parenthesis_is_error() {
    assert!(matches!(eval("2 + 3)"),
                     Err(EvalError::Parse(ParseError::UnbalancedParenthesis))));
    assert!(matches!(eval(")"),
                     Err(EvalError::Parse(ParseError::UnbalancedParenthesis))));
}

#[test]
fn unclosed_opening_parenthesis_is_error() {
    assert!(matches!(eval("(2 + 3"),
                     Err(EvalError::Runtime(RuntimeError::UnknownOperator { symbol: '(' }))));
}

#[test]
fn malformed_expression_is_error() {
    assert!(matches!(eval("2(3)"),
                     Err(EvalError::Parse(ParseError::MalformedExpression))));
    assert!(matches!(eval("(1)(2)"),
                     Err(EvalError::Parse(ParseError::MalformedExpression))));
    assert!(matches!(eval("1 +"),
                     Err(EvalError::Parse(ParseError::MalformedExpression))));
    assert!(matches!(eval("+"),
                     Err(EvalError::Parse(ParseError::MalformedExpression))));
}

#[test]
fn error_messages_are_human_readable() {
    let error = eval("6 / 0").unwrap_err();
    assert_eq!(error.to_string(), "Division by zero.");

    let error = eval("2 + 3 * ?").unwrap_err();
    assert_eq!(error.to_string(), "Invalid character: ?.");
}
