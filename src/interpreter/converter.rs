use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        operator::{Arity, Associativity, Operator, OperatorRegistry},
    },
};

/// A single element of a postfix (reverse Polish) token sequence.
///
/// This is the converter's output and the evaluator's input. Operators are
/// resolved against the registry during conversion, so each carries its full
/// definition with the arity already fixed by context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken {
    /// An integer literal, pushed directly onto the evaluation stack.
    Integer(i64),
    /// A resolved operator definition from the registry.
    Operator(&'static Operator),
}

impl std::fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{}", op.symbol),
        }
    }
}

/// An entry on the conversion stack: a pending operator or the open
/// parenthesis bounding the current group.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(&'static Operator),
    OpenParen,
}

/// Maps an operator token to its symbol character.
///
/// Returns `None` for literals, parentheses and skipped whitespace.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(char)` if the token is one of the six operator symbols, otherwise
/// `None`.
#[must_use]
pub const fn token_symbol(token: Token) -> Option<char> {
    match token {
        Token::Plus => Some('+'),
        Token::Minus => Some('-'),
        Token::Star => Some('*'),
        Token::Slash => Some('/'),
        Token::Percent => Some('%'),
        Token::Caret => Some('^'),
        _ => None,
    }
}

/// Decides whether a `+` or `-` at the current position is unary.
///
/// The symbol is unary when it starts the expression or directly follows an
/// open parenthesis or another operator; it is binary after a literal or a
/// closing parenthesis.
#[must_use]
const fn is_unary_position(previous: Option<Token>) -> bool {
    !matches!(previous, Some(Token::Integer(_) | Token::RParen))
}

/// Converts an infix token sequence into postfix order.
///
/// This is the shunting-yard algorithm. Literals pass straight through to
/// the output; operators wait on a stack until an operator of lower binding
/// strength arrives, which keeps the output in evaluation order. An operator
/// pops the stack while the stacked operator binds strictly tighter, or
/// equally tight with left associativity. The equal-precedence tie-break is
/// what makes `^` nest to the right: `2^3^2` converts to `2 3 2 ^ ^`.
///
/// # Parameters
/// - `tokens`: The infix token sequence from the lexer.
/// - `registry`: Operator definitions used to resolve symbols.
///
/// # Returns
/// The token sequence in postfix order, with operator arity resolved.
///
/// # Errors
/// - `ParseError::UnmatchedParenthesis` if a `)` finds no matching `(` on
///   the stack, or a `(` is still on the stack at end of input.
/// - `ParseError::UnknownOperator` if a symbol resolves to an arity the
///   registry does not define.
pub fn convert(tokens: &[Token],
               registry: &OperatorRegistry)
               -> Result<Vec<PostfixToken>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut previous: Option<Token> = None;

    for &token in tokens {
        match token {
            Token::Integer(value) => output.push(PostfixToken::Integer(value)),
            Token::LParen => stack.push(StackEntry::OpenParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => output.push(PostfixToken::Operator(op)),
                    Some(StackEntry::OpenParen) => break,
                    None => return Err(ParseError::UnmatchedParenthesis),
                }
            },
            other => {
                let Some(symbol) = token_symbol(other) else {
                    continue;
                };

                let arity = if (symbol == '+' || symbol == '-') && is_unary_position(previous) {
                    Arity::Unary
                } else {
                    Arity::Binary
                };
                let op = registry.lookup(symbol, arity)?;

                while let Some(&StackEntry::Operator(top)) = stack.last() {
                    let pops = top.precedence > op.precedence
                               || (top.precedence == op.precedence
                                   && op.associativity == Associativity::Left);
                    if !pops {
                        break;
                    }
                    output.push(PostfixToken::Operator(top));
                    stack.pop();
                }

                stack.push(StackEntry::Operator(op));
            },
        }

        previous = Some(token);
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(PostfixToken::Operator(op)),
            StackEntry::OpenParen => return Err(ParseError::UnmatchedParenthesis),
        }
    }

    Ok(output)
}
