use crate::interpreter::lexer::{Token, TokenKind};

/// Result type used by the lexer and the grammar.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading an expression.
pub enum ParseError {
    /// Found a character that cannot start any token.
    InvalidChar {
        /// The offending character.
        ch:     char,
        /// The 1-based column where the character appears.
        column: usize,
    },
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// The 1-based column where the token starts.
        column:   usize,
        /// The token kinds that would have been accepted instead.
        expected: &'static [TokenKind],
    },
    /// The line ended while the grammar still needed another token.
    UnexpectedEndOfInput {
        /// The column just past the end of the line.
        column:   usize,
        /// The token kinds that would have completed the expression.
        expected: &'static [TokenKind],
    },
    /// A number literal was too large to be represented.
    LiteralTooLarge {
        /// The 1-based column where the literal starts.
        column: usize,
    },
}

/// Writes an expected-kind set as `[NUMBER, UNIT]`.
fn write_expected(f: &mut std::fmt::Formatter<'_>, expected: &[TokenKind]) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, kind) in expected.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{kind}")?;
    }
    write!(f, "]")
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChar { ch, column } => {
                write!(f, "Invalid character {ch} at col {column}")
            },

            Self::UnexpectedToken { token,
                                    column,
                                    expected, } => {
                write!(f, "Unexpected token {token} at col {column}. Expected ")?;
                write_expected(f, expected)
            },

            Self::UnexpectedEndOfInput { column, expected } => {
                write!(f, "Unexpected end of input at col {column}. Expected ")?;
                write_expected(f, expected)
            },

            Self::LiteralTooLarge { column } => {
                write!(f, "Number at col {column} is too large")
            },
        }
    }
}

impl std::error::Error for ParseError {}
