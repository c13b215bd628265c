use shunt::{
    error::{Error, EvalError, ParseError},
    evaluate,
    interpreter::{converter::convert,
                  lexer::{Token, tokenize},
                  operator::OperatorRegistry},
    to_postfix,
};

fn assert_result(expression: &str, expected: i64) {
    match evaluate(expression) {
        Ok(value) => {
            assert_eq!(value, expected,
                       "'{expression}' evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("'{expression}' failed to evaluate: {e}"),
    }
}

fn assert_failure(expression: &str) -> Error {
    match evaluate(expression) {
        Ok(value) => panic!("'{expression}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn postfix_form(expression: &str) -> String {
    to_postfix(expression).unwrap()
                          .iter()
                          .map(ToString::to_string)
                          .collect::<Vec<_>>()
                          .join(" ")
}

#[test]
fn basic_arithmetic() {
    assert_result("1+2", 3);
    assert_result("8-5", 3);
    assert_result("7*9", 63);
    assert_result("10/2", 5);
    assert_result("10%3", 1);
    assert_result("2^10", 1024);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_result("2+3*4", 14);
    assert_result("2*3+4", 10);
    assert_result("2+3*4+5", 19);
    assert_result("20-2*5", 10);
    assert_result("1+2*3-4/2^2", 6);
}

#[test]
fn equal_precedence_evaluates_left_to_right() {
    assert_result("2-3-4", -5);
    assert_result("100/10/5", 2);
    assert_result("10%7%2", 1);
    assert_result("10/2*3", 15);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_result("2^3^2", 512);
    assert_result("(2^3)^2", 64);
    assert_result("2^2^3", 256);
}

#[test]
fn parentheses_override_precedence() {
    assert_result("(2+3)*4", 20);
    assert_result("2*(3+4)", 14);
    assert_result("(((2 + 3))) + (((1 + 2)))", 8);
}

#[test]
fn unary_minus_is_detected_from_context() {
    assert_result("-3+5", 2);
    assert_result("3*-2", -6);
    assert_result("-(2+3)", -5);
    assert_result("--4", 4);
    assert_result("2*(-3+1)", -4);
}

#[test]
fn unary_operators_bind_tighter_than_exponentiation() {
    assert_result("-2^2", 4);
    assert_result("2^-1", 0);
}

#[test]
fn unary_plus_is_the_identity() {
    assert_result("+5", 5);
    assert_result("3++2", 5);
}

#[test]
fn division_and_remainder_truncate_toward_zero() {
    assert_result("7/2", 3);
    assert_result("-7/2", -3);
    assert_result("7/-2", -3);
    assert_result("-7%3", -1);
    assert_result("7%-3", 1);
}

#[test]
fn exponentiation_edge_cases() {
    assert_result("2^0", 1);
    assert_result("0^0", 1);
    assert_result("1^-5", 1);
    assert_result("(-1)^-3", -1);
}

#[test]
fn whitespace_does_not_change_the_token_sequence() {
    assert_eq!(tokenize(" 1 +  2 ").unwrap(), tokenize("1+2").unwrap());
    assert_result(" 1 +  2 ", 3);
    assert_result("\t2 ^\n3", 8);
}

#[test]
fn postfix_form_matches_conventional_notation() {
    assert_eq!(postfix_form("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_form("2^3^2"), "2 3 2 ^ ^");
    assert_eq!(postfix_form("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix_form("-3+5"), "3 - 5 +");
}

#[test]
fn division_by_zero_is_a_typed_error() {
    assert_eq!(assert_failure("5/0"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("5%0"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("3+4/(2-2)"),
               Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("0^-2"), Error::Eval(EvalError::DivisionByZero));
}

#[test]
fn unbalanced_parentheses_are_rejected_during_scanning() {
    assert_eq!(assert_failure("(1+2"),
               Error::Parse(ParseError::UnbalancedParentheses));
    assert_eq!(assert_failure("1+2)"),
               Error::Parse(ParseError::UnbalancedParentheses));
    assert_eq!(assert_failure("((1+2)"),
               Error::Parse(ParseError::UnbalancedParentheses));
}

// The lexer screens imbalance before conversion, so the converter's own
// guards are exercised on hand-built token sequences.
#[test]
fn converter_rejects_unresolved_parentheses() {
    let registry = OperatorRegistry::new();

    let dangling_close = [Token::Integer(1), Token::Plus, Token::Integer(2), Token::RParen];
    assert_eq!(convert(&dangling_close, &registry),
               Err(ParseError::UnmatchedParenthesis));

    let dangling_open = [Token::LParen, Token::Integer(1)];
    assert_eq!(convert(&dangling_open, &registry),
               Err(ParseError::UnmatchedParenthesis));
}

#[test]
fn residual_stack_values_are_malformed_expressions() {
    assert_eq!(assert_failure("3 4"),
               Error::Eval(EvalError::MalformedExpression { remaining: 2 }));
    assert_eq!(assert_failure(""),
               Error::Eval(EvalError::MalformedExpression { remaining: 0 }));
    assert_eq!(assert_failure("()"),
               Error::Eval(EvalError::MalformedExpression { remaining: 0 }));
    assert_eq!(assert_failure("(2+3)(4+5)"),
               Error::Eval(EvalError::MalformedExpression { remaining: 2 }));
}

#[test]
fn missing_operands_are_reported_with_the_operator() {
    assert_eq!(assert_failure("1+"),
               Error::Eval(EvalError::InsufficientOperands { symbol: '+' }));
    assert_eq!(assert_failure("*3"),
               Error::Eval(EvalError::InsufficientOperands { symbol: '*' }));
    assert_eq!(assert_failure("-"),
               Error::Eval(EvalError::InsufficientOperands { symbol: '-' }));
}

#[test]
fn illegal_characters_are_reported_with_their_position() {
    assert_eq!(assert_failure("2&3"),
               Error::Parse(ParseError::InvalidCharacter { character: '&', position: 1 }));
    assert_eq!(assert_failure("a+1"),
               Error::Parse(ParseError::InvalidCharacter { character: 'a', position: 0 }));
}

#[test]
fn oversized_literals_are_rejected() {
    assert_eq!(assert_failure("99999999999999999999"),
               Error::Parse(ParseError::LiteralTooLarge { position: 0 }));
    assert_result("9223372036854775807", i64::MAX);
}
