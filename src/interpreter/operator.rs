use crate::error::{EvalError, ParseError};

/// Result type used by operator application and the postfix evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Tie-breaking rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Evaluate left-to-right: `2 - 3 - 4` is `(2 - 3) - 4`.
    Left,
    /// Evaluate right-to-left: `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
    Right,
}

/// Number of operands an operator consumes from the evaluation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand, such as the negation in `-3`.
    Unary,
    /// Two operands, such as `2 + 3`.
    Binary,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unary => write!(f, "unary"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// Tags the evaluation behavior of an operator.
///
/// Each registry entry carries one of these instead of a per-instance
/// closure, so arity handling is checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Negate,
    Identity,
}

/// An immutable operator definition.
///
/// Holds everything the converter and the evaluator need to know about one
/// operator: its symbol, how tightly it binds, how equal-precedence ties are
/// broken, and how many operands it consumes. The evaluation behavior itself
/// is dispatched through a private tag via [`Operator::apply_binary`] and
/// [`Operator::apply_unary`].
#[derive(Debug, PartialEq, Eq)]
pub struct Operator {
    /// The operator symbol, one of `+ - * / % ^`.
    pub symbol:        char,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Tie-break rule for equal precedence.
    pub associativity: Associativity,
    /// Number of operands consumed.
    pub arity:         Arity,
    kind:              OpKind,
}

/// The fixed operator table.
///
/// Unary `-` and `+` bind tighter than every binary operator and are
/// right-associative, so `--4` nests correctly and `-2^2` is `(-2)^2`.
static TABLE: [Operator; 8] = [
    Operator { symbol:        '+',
               precedence:    1,
               associativity: Associativity::Left,
               arity:         Arity::Binary,
               kind:          OpKind::Add, },
    Operator { symbol:        '-',
               precedence:    1,
               associativity: Associativity::Left,
               arity:         Arity::Binary,
               kind:          OpKind::Sub, },
    Operator { symbol:        '*',
               precedence:    2,
               associativity: Associativity::Left,
               arity:         Arity::Binary,
               kind:          OpKind::Mul, },
    Operator { symbol:        '/',
               precedence:    2,
               associativity: Associativity::Left,
               arity:         Arity::Binary,
               kind:          OpKind::Div, },
    Operator { symbol:        '%',
               precedence:    2,
               associativity: Associativity::Left,
               arity:         Arity::Binary,
               kind:          OpKind::Rem, },
    Operator { symbol:        '^',
               precedence:    3,
               associativity: Associativity::Right,
               arity:         Arity::Binary,
               kind:          OpKind::Pow, },
    Operator { symbol:        '-',
               precedence:    4,
               associativity: Associativity::Right,
               arity:         Arity::Unary,
               kind:          OpKind::Negate, },
    Operator { symbol:        '+',
               precedence:    4,
               associativity: Associativity::Right,
               arity:         Arity::Unary,
               kind:          OpKind::Identity, },
];

impl Operator {
    /// Applies a binary operator to two operands.
    ///
    /// Addition, subtraction and multiplication wrap on overflow. Division
    /// and remainder truncate toward zero (C semantics) and fail on a zero
    /// right-hand operand. Exponentiation is integer square-and-multiply.
    ///
    /// # Parameters
    /// - `a`: Left operand.
    /// - `b`: Right operand.
    ///
    /// # Returns
    /// The computed value wrapped in [`EvalResult`].
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::{Arity, OperatorRegistry};
    ///
    /// let registry = OperatorRegistry::new();
    /// let slash = registry.lookup('/', Arity::Binary).unwrap();
    ///
    /// assert_eq!(slash.apply_binary(7, 2).unwrap(), 3);
    /// assert!(slash.apply_binary(7, 0).is_err());
    /// ```
    pub const fn apply_binary(&self, a: i64, b: i64) -> EvalResult<i64> {
        match self.kind {
            OpKind::Add => Ok(a.wrapping_add(b)),
            OpKind::Sub => Ok(a.wrapping_sub(b)),
            OpKind::Mul => Ok(a.wrapping_mul(b)),
            OpKind::Div => {
                if b == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(a.wrapping_div(b))
                }
            },
            OpKind::Rem => {
                if b == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(a.wrapping_rem(b))
                }
            },
            OpKind::Pow => pow_truncated(a, b),
            OpKind::Negate | OpKind::Identity => unreachable!(),
        }
    }

    /// Applies a unary operator to a single operand.
    ///
    /// # Parameters
    /// - `a`: The operand.
    ///
    /// # Returns
    /// The computed value wrapped in [`EvalResult`].
    pub const fn apply_unary(&self, a: i64) -> EvalResult<i64> {
        match self.kind {
            OpKind::Negate => Ok(a.wrapping_neg()),
            OpKind::Identity => Ok(a),
            OpKind::Add
            | OpKind::Sub
            | OpKind::Mul
            | OpKind::Div
            | OpKind::Rem
            | OpKind::Pow => unreachable!(),
        }
    }
}

/// Integer exponentiation by squaring, with wrapping multiplication.
///
/// `x^0` is `1`. A negative exponent truncates the rational result toward
/// zero, so it is `0` for any base with magnitude greater than one, `1` for
/// base `1`, and alternates sign for base `-1`. Zero raised to a negative
/// exponent is a division by zero.
const fn pow_truncated(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        return match base {
            0 => Err(EvalError::DivisionByZero),
            1 => Ok(1),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => Ok(0),
        };
    }

    let mut result: i64 = 1;
    let mut base = base;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }

    Ok(result)
}

/// The fixed set of supported operators.
///
/// Constructed once and read-only thereafter; a symbol such as `-` may map
/// to both a binary and a unary definition, distinguished by the requested
/// [`Arity`]. Every operator symbol accepted by the lexer has at least one
/// entry here.
#[derive(Debug)]
pub struct OperatorRegistry {
    operators: &'static [Operator],
}

impl OperatorRegistry {
    /// Creates a registry over the built-in operator table.
    #[must_use]
    pub const fn new() -> Self {
        Self { operators: &TABLE }
    }

    /// Looks up the operator definition matching both symbol and arity.
    ///
    /// # Parameters
    /// - `symbol`: The operator symbol, such as `'+'`.
    /// - `arity`: The requested arity.
    ///
    /// # Returns
    /// A reference to the matching definition.
    ///
    /// # Errors
    /// `ParseError::UnknownOperator` if no definition matches.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::{Arity, Associativity, OperatorRegistry};
    ///
    /// let registry = OperatorRegistry::new();
    ///
    /// let caret = registry.lookup('^', Arity::Binary).unwrap();
    /// assert_eq!(caret.precedence, 3);
    /// assert_eq!(caret.associativity, Associativity::Right);
    ///
    /// // `*` has no unary definition.
    /// assert!(registry.lookup('*', Arity::Unary).is_err());
    /// ```
    pub fn lookup(&self, symbol: char, arity: Arity) -> Result<&'static Operator, ParseError> {
        self.operators
            .iter()
            .find(|op| op.symbol == symbol && op.arity == arity)
            .ok_or(ParseError::UnknownOperator { symbol, arity })
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
