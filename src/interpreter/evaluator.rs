use crate::{
    error::{EstimateResult, RuntimeError},
    interpreter::{
        grammar::{State, Term},
        lexer::Lexer,
    },
    util::num::scale_checked,
};

impl Term {
    /// Converts the term to hours and folds it into `total`.
    ///
    /// # Errors
    /// `RuntimeError::Overflow` if the term or the new total does not fit.
    pub fn apply(&self, total: i64) -> Result<i64, RuntimeError> {
        let hours = scale_checked(self.count, self.unit.hours(), self.column)?;
        self.op
            .apply(total, hours)
            .ok_or(RuntimeError::Overflow { column: self.column })
    }
}

/// Evaluates one line of estimate notation to a signed number of hours.
///
/// The line is read in a single forward pass: the lexer hands over one token
/// at a time, the grammar checks it against what may come next, and every
/// completed term is added to or subtracted from the total. The first error
/// stops evaluation and no partial total is returned.
///
/// An empty or whitespace-only line evaluates to `0`.
///
/// # Errors
/// - `ParseError::InvalidChar` for a character outside the notation.
/// - `ParseError::UnexpectedToken` for a token in the wrong place.
/// - `ParseError::UnexpectedEndOfInput` when the line stops mid-term or
///   after an operator.
/// - `ParseError::LiteralTooLarge` / `RuntimeError::Overflow` when numbers
///   exceed what a 64-bit hour count can hold.
///
/// # Examples
/// ```
/// use estimate::interpreter::evaluator::evaluate;
///
/// assert_eq!(evaluate("5w + 7d").unwrap(), 256);
/// assert_eq!(evaluate("3h - 5h").unwrap(), -2);
/// assert!(evaluate("2 +").is_err());
/// ```
pub fn evaluate(source: &str) -> EstimateResult<i64> {
    let mut lexer = Lexer::new(source);
    let mut state = State::Start;
    let mut total: i64 = 0;

    for spanned in lexer.by_ref() {
        let (next, term) = state.transition(spanned?)?;
        if let Some(term) = term {
            total = term.apply(total)?;
        }
        state = next;
    }

    state.finish(lexer.end_column())?;

    tracing::debug!(source, total, "evaluated expression");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::{
        error::{Error, ParseError},
        interpreter::lexer::{Operator, Token, TokenKind},
        units::{HOURS_PER_DAY, HOURS_PER_WEEK},
    };

    #[test]
    fn sums_terms_in_hours() {
        assert_eq!(evaluate("5w + 7d"), Ok(5 * HOURS_PER_WEEK + 7 * HOURS_PER_DAY));
    }

    #[test]
    fn subtraction_can_go_negative() {
        assert_eq!(evaluate("3h - 5h"), Ok(-2));
    }

    #[test]
    fn operator_applies_to_one_term_only() {
        assert_eq!(evaluate("1d - 2h 1h"), Ok(8 - 2 + 1));
    }

    #[test]
    fn blank_line_is_zero() {
        assert_eq!(evaluate(""), Ok(0));
        assert_eq!(evaluate("   "), Ok(0));
    }

    #[test]
    fn trailing_operator_is_an_error() {
        assert_eq!(evaluate("2h +"),
                   Err(Error::Parse(ParseError::UnexpectedEndOfInput { column:   5,
                                                                       expected: &[TokenKind::Number], })));
    }

    #[test]
    fn bare_number_is_an_error() {
        assert!(matches!(evaluate("5"),
                         Err(Error::Parse(ParseError::UnexpectedEndOfInput { column: 2, .. }))));
    }

    #[test]
    fn doubled_operator_is_an_error() {
        assert_eq!(evaluate("1h + - 2h"),
                   Err(Error::Parse(ParseError::UnexpectedToken { token:    Token::Operator(Operator::Minus),
                                                                  column:   6,
                                                                  expected: &[TokenKind::Number], })));
    }

    #[test]
    fn invalid_character_wins_over_grammar() {
        assert_eq!(evaluate("2x"),
                   Err(Error::Parse(ParseError::InvalidChar { ch:     'x',
                                                              column: 2, })));
    }

    #[test]
    fn digits_split_by_whitespace_form_one_number() {
        assert_eq!(evaluate("1 2h"), Ok(12));
        assert_eq!(evaluate("1h 2 3d"), Ok(1 + 23 * HOURS_PER_DAY));
    }

    #[test]
    fn long_lines_evaluate_in_linear_time() {
        fn fastest_run(terms: usize) -> Duration {
            let source = "1h ".repeat(terms);
            let expected = i64::try_from(terms).unwrap();
            (0..3).map(|_| {
                      let start = Instant::now();
                      assert_eq!(evaluate(&source), Ok(expected));
                      start.elapsed()
                  })
                  .min()
                  .unwrap()
        }

        // 4x the input; a quadratic pass would take about 16x as long.
        let short = fastest_run(25_000);
        let long = fastest_run(100_000);
        assert!(long < short * 10, "25k terms took {short:?}, 100k terms took {long:?}");
    }

    #[test]
    fn overflowing_total_is_an_error() {
        let source = format!("{}h + 1h", i64::MAX);
        assert_eq!(evaluate(&source),
                   Err(Error::Runtime(RuntimeError::Overflow { column: source.len() })));
    }
}
