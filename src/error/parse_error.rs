use crate::interpreter::operator::Arity;

#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression or
/// converting it to postfix order.
pub enum ParseError {
    /// Found a character outside the accepted set.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// The input contains mismatched parentheses.
    UnbalancedParentheses,
    /// A parenthesis could not be resolved during conversion.
    UnmatchedParenthesis,
    /// The registry has no operator definition for a symbol and arity.
    UnknownOperator {
        /// The operator symbol.
        symbol: char,
        /// The requested arity.
        arity:  Arity,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Integer literal at position {position} is too large.")
            },

            Self::UnbalancedParentheses => {
                write!(f, "Unbalanced parentheses in expression.")
            },

            Self::UnmatchedParenthesis => {
                write!(f, "Unmatched parenthesis in expression.")
            },

            Self::UnknownOperator { symbol, arity } => {
                write!(f, "Unknown {arity} operator '{symbol}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
