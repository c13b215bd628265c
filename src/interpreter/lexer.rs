use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an infix expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens: integer literals, the six
/// operator symbols, and the two parentheses.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `7` or `1024`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Scans an expression string into a token sequence.
///
/// Whitespace is skipped and consecutive digits are grouped into a single
/// multi-digit [`Token::Integer`]. Parenthesis balance is verified during
/// the same pass: every `)` must close a `(` seen earlier, and no `(` may
/// remain open at end of input.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The token sequence in source order.
///
/// # Errors
/// - `ParseError::InvalidCharacter` for any character outside digits,
///   whitespace, and `+ - * / % ^ ( )`.
/// - `ParseError::LiteralTooLarge` for an integer literal that overflows.
/// - `ParseError::UnbalancedParentheses` for mismatched parentheses.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 + 3").unwrap();
/// assert_eq!(tokens, vec![Token::Integer(12), Token::Plus, Token::Integer(3)]);
///
/// // Whitespace never changes the token sequence.
/// assert_eq!(tokenize(" 1 +  2 ").unwrap(), tokenize("1+2").unwrap());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut depth: usize = 0;
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let Ok(token) = result else {
            let position = lexer.span().start;
            let character = lexer.slice().chars().next().unwrap_or_default();

            // A failed callback on the integer rule means the digits
            // overflowed, not that the character set was violated.
            if character.is_ascii_digit() {
                return Err(ParseError::LiteralTooLarge { position });
            }
            return Err(ParseError::InvalidCharacter { character, position });
        };

        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                if depth == 0 {
                    return Err(ParseError::UnbalancedParentheses);
                }
                depth -= 1;
            },
            _ => {},
        }

        tokens.push(token);
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedParentheses);
    }

    Ok(tokens)
}
