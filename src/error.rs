/// Parsing errors.
///
/// Defines the errors raised while lexing a line and checking its tokens
/// against the grammar: invalid characters, tokens in the wrong place, lines
/// that end too early and oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised once the input is known to be
/// well-formed, which is only arithmetic overflow of the total.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type returned by [`crate::evaluate`].
pub type EstimateResult<T> = Result<T, Error>;

/// Any error produced while evaluating one line.
///
/// Errors are per line: the caller reports them and carries on with the next
/// line. No partial total is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be read as an expression.
    Parse(ParseError),
    /// The expression was well-formed but its total could not be computed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
