/// The evaluator module computes the total of an expression.
///
/// The evaluator pulls tokens from the lexer one at a time, feeds them to the
/// grammar, and folds every completed term into a signed hour total. It is
/// the single entry point used by the shell and by [`crate::Estimate`].
///
/// # Responsibilities
/// - Drives the lexer and the grammar over one line.
/// - Converts terms to hours with overflow checks.
/// - Stops at the first error without returning a partial total.
pub mod evaluator;
/// The grammar module checks the order of tokens.
///
/// A small finite-state machine tracks whether a number, a unit, or an
/// operator-or-number is expected next, and reports the acceptable token
/// kinds when something else arrives.
pub mod grammar;
/// The lexer module tokenizes an input line.
///
/// The lexer reads the raw text and produces numbers, unit letters and
/// operators on demand, each tagged with its 1-based column.
///
/// # Responsibilities
/// - Skips whitespace.
/// - Reads digit runs greedily into a single number.
/// - Reports the first character outside the notation.
pub mod lexer;
