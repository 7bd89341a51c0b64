use crate::{
    error::{ParseError, parse_error::ParseResult},
    interpreter::lexer::{Operator, Spanned, Token, TokenKind},
    units::Unit,
};

/// Position of the grammar within an expression.
///
/// The notation is a flat alternation of terms and operators:
///
/// ```text
///     expression := (term (operator? term)*)?
///     term       := NUMBER UNIT
///     operator   := "+" | "-"
/// ```
///
/// A term that directly follows another term with no operator between them
/// is added, so `1d 2h` reads as `1d + 2h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing has been read yet. Ending here is an empty expression.
    Start,
    /// An operator was read; its operand must follow.
    ExpectNumber {
        /// The operator applied to the coming term.
        op: Operator,
    },
    /// A number was read and must be followed by its unit.
    ExpectUnit {
        /// The operator applied to this term.
        op:    Operator,
        /// The number of units in this term.
        count: u64,
    },
    /// A full term was read. The expression may end, continue with an
    /// operator, or continue directly with another number.
    ExpectOperatorOrNumber,
}

/// One completed `NUMBER UNIT` term together with its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Whether the term is added to or subtracted from the total.
    pub op:     Operator,
    /// How many units the term holds.
    pub count:  u64,
    /// The unit of the term.
    pub unit:   Unit,
    /// Column of the unit letter that closed the term.
    pub column: usize,
}

impl State {
    /// Returns the token kinds this state accepts next.
    #[must_use]
    pub const fn expected(&self) -> &'static [TokenKind] {
        match self {
            Self::Start | Self::ExpectNumber { .. } => &[TokenKind::Number],
            Self::ExpectUnit { .. } => &[TokenKind::Unit],
            Self::ExpectOperatorOrNumber => &[TokenKind::Operator, TokenKind::Number],
        }
    }

    /// Advances the grammar by one token.
    ///
    /// # Parameters
    /// - `spanned`: The next token from the lexer and its column.
    ///
    /// # Returns
    /// The following state and, when the token closed a term, that term.
    ///
    /// # Errors
    /// `UnexpectedToken` if the token's kind is not in [`State::expected`].
    pub fn transition(self, spanned: Spanned) -> ParseResult<(Self, Option<Term>)> {
        let Spanned { token, column } = spanned;

        let next = match (self, token) {
            (Self::Start | Self::ExpectOperatorOrNumber, Token::Number(count)) => {
                (Self::ExpectUnit { op: Operator::Plus,
                                    count },
                 None)
            },
            (Self::ExpectNumber { op }, Token::Number(count)) => {
                (Self::ExpectUnit { op, count }, None)
            },
            (Self::ExpectUnit { op, count }, Token::Unit(unit)) => {
                (Self::ExpectOperatorOrNumber,
                 Some(Term { op,
                             count,
                             unit,
                             column }))
            },
            (Self::ExpectOperatorOrNumber, Token::Operator(op)) => (Self::ExpectNumber { op }, None),
            (state, token) => {
                return Err(ParseError::UnexpectedToken { token,
                                                         column,
                                                         expected: state.expected() });
            },
        };

        tracing::trace!(from = ?self, to = ?next.0, "grammar transition");
        Ok(next)
    }

    /// Checks that the expression may end in this state.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` when a number or unit is still owed, as in
    /// `2 +` or a bare `5`.
    pub const fn finish(self, column: usize) -> ParseResult<()> {
        match self {
            Self::Start | Self::ExpectOperatorOrNumber => Ok(()),
            Self::ExpectNumber { .. } | Self::ExpectUnit { .. } => {
                Err(ParseError::UnexpectedEndOfInput { column,
                                                       expected: self.expected() })
            },
        }
    }
}
