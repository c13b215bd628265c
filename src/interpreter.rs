/// Scans raw expression text into tokens.
///
/// This module declares the `Token` enum produced by the lexer and the
/// `tokenize` entry point. It validates character legality, groups
/// consecutive digits into multi-digit integer literals, and checks that
/// parentheses are balanced during the same pass.
///
/// # Responsibilities
/// - Defines all recognized tokens: literals, operator symbols, parentheses.
/// - Skips whitespace without affecting the token sequence.
/// - Rejects illegal characters and oversized literals with positions.
pub mod lexer;

/// Holds the fixed set of supported operators.
///
/// This module defines the operator registry: for each operator its symbol,
/// precedence, associativity, arity, and evaluation behavior. The table is
/// constructed once and read-only thereafter.
///
/// # Responsibilities
/// - Resolves a symbol and arity to an operator definition.
/// - Applies binary and unary operators to integer operands.
/// - Checks division and remainder for a zero right-hand operand.
pub mod operator;

/// Converts infix token sequences to postfix order.
///
/// This module implements the shunting-yard algorithm: it resolves operator
/// precedence, associativity and parenthesis grouping, and decides from
/// context whether a `+` or `-` is unary or binary.
///
/// # Responsibilities
/// - Produces the `PostfixToken` sequence consumed by the evaluator.
/// - Resolves each operator symbol against the registry.
/// - Detects parentheses left unresolved after conversion.
pub mod converter;

/// Evaluates postfix token sequences.
///
/// This module executes the stack machine: literals push their value and
/// operators pop their operands, apply the registry definition and push the
/// result back.
///
/// # Responsibilities
/// - Enforces operand availability for every operator.
/// - Requires exactly one residual value at end of input.
pub mod evaluator;
