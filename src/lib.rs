//! # shunt
//!
//! shunt is an infix arithmetic expression evaluator written in Rust.
//! It converts an expression into postfix (reverse Polish) notation with the
//! shunting-yard algorithm, then executes the postfix sequence on a stack
//! machine. It supports integer literals, the binary operators `+ - * / %
//! ^`, unary `-` and `+`, and parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{converter::{self, PostfixToken},
                  evaluator,
                  lexer,
                  operator::OperatorRegistry},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting, or evaluating an expression. Every failure mode is a typed
/// value surfaced to the caller; the core never prints and never recovers.
///
/// # Responsibilities
/// - Defines error enums for the parse and evaluation phases.
/// - Attaches positions and offending symbols where they are known.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the operator registry, the
/// infix-to-postfix converter, and the postfix evaluator. Data flows one
/// way: raw string, token sequence, postfix sequence, integer result.
///
/// # Responsibilities
/// - Coordinates all core components of the pipeline.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Converts an infix expression into its postfix token sequence.
///
/// This runs the first two pipeline stages, tokenization and shunting-yard
/// conversion, and returns the intermediate form. Each element displays as
/// its literal value or operator symbol, so the sequence can be rendered in
/// the conventional space-separated notation.
///
/// # Errors
/// Returns an error if the expression contains illegal characters,
/// oversized literals, or mismatched parentheses.
///
/// # Example
/// ```
/// use shunt::to_postfix;
///
/// let postfix = to_postfix("2+3*4").unwrap();
/// let rendered = postfix.iter()
///                       .map(ToString::to_string)
///                       .collect::<Vec<_>>()
///                       .join(" ");
/// assert_eq!(rendered, "2 3 4 * +");
/// ```
pub fn to_postfix(source: &str) -> Result<Vec<PostfixToken>, Error> {
    let registry = OperatorRegistry::new();
    let tokens = lexer::tokenize(source)?;
    Ok(converter::convert(&tokens, &registry)?)
}

/// Evaluates an infix expression to a single integer.
///
/// This is the main entry point: it tokenizes the expression, converts it
/// to postfix order, and executes the result on a stack machine. Each call
/// is a pure function of its input; no state survives between calls.
///
/// # Errors
/// Returns an error if the expression cannot be parsed or evaluated, such
/// as for illegal characters, mismatched parentheses, division by zero, or
/// a structurally invalid expression.
///
/// # Example
/// ```
/// use shunt::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20);
///
/// // `^` is right-associative.
/// assert_eq!(evaluate("2^3^2").unwrap(), 512);
///
/// // Division by zero is a typed error, not a panic.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let postfix = to_postfix(source)?;
    Ok(evaluator::evaluate(&postfix)?)
}
