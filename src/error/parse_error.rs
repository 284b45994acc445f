use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing of a line.
pub enum ParseError {
    /// Found a token where a different one was required.
    UnexpectedToken {
        /// The kind of the offending token.
        token: TokenKind,
    },
    /// A number lexeme could not be converted to a float.
    InvalidNumber {
        /// The lexeme as scanned.
        literal: String,
    },
    /// Strict scanning met a character that is not part of any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "unexpected token {token}"),
            Self::InvalidNumber { literal } => write!(f, "invalid number literal '{literal}'"),
            Self::InvalidCharacter { character } => {
                write!(f, "invalid character '{character}'")
            },
        }
    }
}

impl std::error::Error for ParseError {}
