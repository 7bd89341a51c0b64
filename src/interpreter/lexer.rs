use logos::Logos;

use crate::{
    error::{ParseError, parse_error::ParseResult},
    units::Unit,
};

/// Represents a lexical token in an estimate expression.
///
/// An expression such as `2w + 3d` is made of exactly three kinds of token:
/// numbers, unit letters and the two additive operators. Whitespace is
/// skipped by the lexer and never reaches the grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Non-negative integer literal, such as `42`. A digit run carries on
    /// across whitespace, so `1 2` is the single number `12`.
    #[regex(r"[0-9](\s*[0-9])*", parse_number)]
    Number(u64),
    /// One of the unit letters `h`, `d`, `w`, `m` or `y`.
    #[regex(r"[hdwmy]", parse_unit)]
    Unit(Unit),
    /// `+` or `-`
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    Operator(Operator),
}

/// The additive operators joining two terms.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Operator {
    /// `+`, also implied between two terms with no operator.
    #[default]
    Plus,
    /// `-`
    Minus,
}

impl Operator {
    /// Applies the operator to a running total, returning `None` on overflow.
    #[must_use]
    pub const fn apply(self, total: i64, hours: i64) -> Option<i64> {
        match self {
            Self::Plus => total.checked_add(hours),
            Self::Minus => total.checked_sub(hours),
        }
    }
}

/// The payload-free kind of a [`Token`], used to describe what the grammar
/// expects next.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Unit,
    Operator,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "NUMBER({n})"),
            Self::Unit(unit) => write!(f, "UNIT({unit})"),
            Self::Operator(Operator::Plus) => write!(f, "OPERATOR(PLUS)"),
            Self::Operator(Operator::Minus) => write!(f, "OPERATOR(MINUS)"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "NUMBER"),
            Self::Unit => write!(f, "UNIT"),
            Self::Operator => write!(f, "OPERATOR"),
        }
    }
}

/// A token together with the column it started at.
///
/// Columns are 1-based and counted in characters, not bytes. They are only
/// used for diagnostics.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// 1-based column of the token's first character.
    pub column: usize,
}

/// Pull-based tokenizer over a single input line.
///
/// Tokens are produced one at a time as the caller asks for them; nothing is
/// buffered. Iteration yields `Err` at the first character that cannot start
/// a token, and `None` once the line is exhausted.
///
/// ## Example
/// ```
/// use estimate::interpreter::lexer::{Lexer, Token};
///
/// let kinds: Vec<Token> = Lexer::new("2w + 3d").map(|t| t.unwrap().token).collect();
/// assert_eq!(kinds.len(), 5);
/// ```
pub struct Lexer<'src> {
    source:      &'src str,
    inner:       logos::Lexer<'src, Token>,
    /// Byte offset `last_column` was computed for.
    last_offset: usize,
    /// 1-based column at `last_offset`.
    last_column: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Token::lexer(source),
               last_offset: 0,
               last_column: 1 }
    }

    /// Column just past the last character of the line. Reported when the
    /// line ends while the grammar still needs a token.
    pub fn end_column(&mut self) -> usize {
        self.column_at(self.source.len())
    }

    /// Converts a byte offset into a 1-based character column.
    ///
    /// Offsets only move forward, so each call counts just the characters
    /// since the previous one and a whole line costs one pass.
    fn column_at(&mut self, offset: usize) -> usize {
        if offset > self.last_offset {
            self.last_column += self.source[self.last_offset..offset].chars().count();
            self.last_offset = offset;
        }
        self.last_column
    }

    /// Builds the error for a slice `logos` could not tokenize.
    ///
    /// A digit run only fails when its value does not fit in a `u64`; any
    /// other failure is a character outside the notation.
    fn classify_error(&self, column: usize) -> ParseError {
        let slice = self.inner.slice();
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            return ParseError::LiteralTooLarge { column };
        }
        let ch = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        ParseError::InvalidChar { ch, column }
    }
}

impl Iterator for Lexer<'_> {
    type Item = ParseResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let column = self.column_at(self.inner.span().start);

        Some(match result {
            Ok(token) => {
                tracing::trace!(%token, column, "lexed token");
                Ok(Spanned { token, column })
            },
            Err(()) => Err(self.classify_error(column)),
        })
    }
}

/// Parses an integer literal from the current token slice, ignoring any
/// whitespace between its digits.
///
/// # Returns
/// - `Some(u64)`: The parsed value.
/// - `None`: If the digit run is too long to fit, which `logos` reports as an
///   error on the same slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice()
       .chars()
       .filter_map(|c| c.to_digit(10))
       .try_fold(0u64, |value, digit| value.checked_mul(10)?.checked_add(u64::from(digit)))
}

/// Parses a unit letter from the current token slice.
fn parse_unit(lex: &logos::Lexer<Token>) -> Option<Unit> {
    lex.slice().chars().next().and_then(Unit::from_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Spanned> {
        Lexer::new(source).collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn splits_expression_into_tokens() {
        let got: Vec<Token> = tokens("2w + 3d").into_iter().map(|s| s.token).collect();
        assert_eq!(got,
                   vec![Token::Number(2),
                        Token::Unit(Unit::Week),
                        Token::Operator(Operator::Plus),
                        Token::Number(3),
                        Token::Unit(Unit::Day)]);
    }

    #[test]
    fn digit_runs_are_greedy() {
        let got = tokens("120h");
        assert_eq!(got[0].token, Token::Number(120));
        assert_eq!(got[1], Spanned { token:  Token::Unit(Unit::Hour),
                                     column: 4, });
    }

    #[test]
    fn digit_runs_continue_across_whitespace() {
        let got = tokens("1 2 \t3 h");
        assert_eq!(got,
                   vec![Spanned { token:  Token::Number(123),
                                  column: 1, },
                        Spanned { token:  Token::Unit(Unit::Hour),
                                  column: 8, }]);
    }

    #[test]
    fn trailing_whitespace_is_not_part_of_a_number() {
        let mut lexer = Lexer::new("12  ");
        assert_eq!(lexer.next().unwrap().unwrap().token, Token::Number(12));
        assert!(lexer.next().is_none());
        assert_eq!(lexer.end_column(), 5);
    }

    #[test]
    fn end_column_follows_the_last_token() {
        let mut lexer = Lexer::new("é 1h +");
        assert_eq!(lexer.by_ref().count(), 4);
        assert_eq!(lexer.end_column(), 7);
    }

    #[test]
    fn columns_are_one_based_and_skip_whitespace() {
        let columns: Vec<usize> = tokens("  5d\t-  1h").into_iter().map(|s| s.column).collect();
        assert_eq!(columns, vec![3, 4, 6, 9, 10]);
    }

    #[test]
    fn every_unit_letter_is_recognised() {
        let got: Vec<Token> = tokens("hdwmy").into_iter().map(|s| s.token).collect();
        assert_eq!(got,
                   vec![Token::Unit(Unit::Hour),
                        Token::Unit(Unit::Day),
                        Token::Unit(Unit::Week),
                        Token::Unit(Unit::Month),
                        Token::Unit(Unit::Year)]);
    }

    #[test]
    fn empty_and_blank_lines_have_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t ").is_empty());
    }

    #[test]
    fn invalid_character_is_reported_with_its_column() {
        let mut lexer = Lexer::new("2x");
        assert_eq!(lexer.next().unwrap().unwrap().token, Token::Number(2));
        assert_eq!(lexer.next().unwrap().unwrap_err(),
                   ParseError::InvalidChar { ch:     'x',
                                             column: 2, });
    }

    #[test]
    fn uppercase_units_are_invalid() {
        let err = Lexer::new("H").next().unwrap().unwrap_err();
        assert_eq!(err, ParseError::InvalidChar { ch:     'H',
                                                  column: 1, });
    }

    #[test]
    fn non_ascii_columns_count_characters() {
        let err = Lexer::new("1h é").nth(2).unwrap().unwrap_err();
        assert_eq!(err, ParseError::InvalidChar { ch:     'é',
                                                  column: 4, });
    }

    #[test]
    fn oversized_literal_is_rejected() {
        let err = Lexer::new("99999999999999999999999h").next().unwrap().unwrap_err();
        assert_eq!(err, ParseError::LiteralTooLarge { column: 1 });
    }
}
