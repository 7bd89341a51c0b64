#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised while computing a total from well-formed input.
pub enum RuntimeError {
    /// A term or the running total no longer fits in a signed hour count.
    Overflow {
        /// The 1-based column of the unit that completed the offending term.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { column } => {
                write!(f, "Integer overflow while adding the term ending at col {column}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
