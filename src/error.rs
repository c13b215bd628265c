/// Tokenization and conversion errors.
///
/// Defines all error types that can occur while scanning an expression into
/// tokens or converting it to postfix order: illegal characters, oversized
/// literals, and parenthesis mismatches.
pub mod parse_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a postfix
/// sequence: missing operands, division by zero, and structurally invalid
/// expressions.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

#[derive(Debug, PartialEq, Eq)]
/// Any error produced by the evaluation pipeline.
///
/// Wraps the phase-specific error types so the pipeline entry points can
/// return a single typed result.
pub enum Error {
    /// The expression could not be tokenized or converted.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}
