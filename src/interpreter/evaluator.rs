use crate::{
    error::EvalError,
    interpreter::{converter::PostfixToken, operator::Arity},
};

/// Executes a postfix token sequence on a value stack.
///
/// Literals push their value. A binary operator pops the right-hand operand
/// first, then the left-hand one, applies its definition and pushes the
/// result; a unary operator pops a single value. A well-formed expression
/// leaves exactly one value on the stack, which becomes the result.
///
/// # Parameters
/// - `postfix`: The token sequence in postfix order.
///
/// # Returns
/// The integer value of the expression.
///
/// # Errors
/// - `EvalError::InsufficientOperands` if an operator needs more values than
///   the stack holds.
/// - `EvalError::DivisionByZero` for `/` or `%` with a zero right-hand
///   operand.
/// - `EvalError::MalformedExpression` if the residual stack size is not
///   exactly one, such as for `3 4` (two values) or an empty input (none).
pub fn evaluate(postfix: &[PostfixToken]) -> Result<i64, EvalError> {
    let mut stack: Vec<i64> = Vec::new();

    for token in postfix {
        match token {
            PostfixToken::Integer(value) => stack.push(*value),
            PostfixToken::Operator(op) => {
                let result = match op.arity {
                    Arity::Binary => {
                        let Some(b) = stack.pop() else {
                            return Err(EvalError::InsufficientOperands { symbol: op.symbol });
                        };
                        let Some(a) = stack.pop() else {
                            return Err(EvalError::InsufficientOperands { symbol: op.symbol });
                        };
                        op.apply_binary(a, b)?
                    },
                    Arity::Unary => {
                        let Some(a) = stack.pop() else {
                            return Err(EvalError::InsufficientOperands { symbol: op.symbol });
                        };
                        op.apply_unary(a)?
                    },
                };

                stack.push(result);
            },
        }
    }

    if let [result] = stack[..] {
        Ok(result)
    } else {
        Err(EvalError::MalformedExpression { remaining: stack.len() })
    }
}
