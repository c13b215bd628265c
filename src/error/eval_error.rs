#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// An operator needed more values than the stack held.
    InsufficientOperands {
        /// The operator symbol.
        symbol: char,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero,
    /// Evaluation finished with a residual stack size other than one.
    MalformedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { symbol } => {
                write!(f, "Not enough operands for operator '{symbol}'.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::MalformedExpression { remaining } => write!(f,
                                                              "Malformed expression: {remaining} values remain after evaluation."),
        }
    }
}

impl std::error::Error for EvalError {}
