//! # estimate
//!
//! estimate is a calculator for time estimates written in a compact
//! notation such as `2w + 3d - 5h`. Terms are combined on a working calendar
//! of 8-hour days, 5-day weeks, 4-week months and 12-month years, and the
//! total is rendered back largest unit first.
//!
//! ```
//! use estimate::{evaluate, format_hours};
//!
//! let hours = evaluate("5w + 7d").unwrap();
//! assert_eq!(format_hours(hours), "1m 2w 2d");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for lexing, grammar checks and evaluation.
///
/// Every failure carries the column it was detected at so the shell can
/// point at the offending part of the line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, arithmetic).
/// - Implements `Display` with messages meant for the end user.
/// - Unifies both families under [`error::Error`] for `?` propagation.
pub mod error;
/// Formatting of hour totals back into estimate notation.
///
/// Defines the [`Estimate`] newtype and [`format_hours`], which decompose a
/// total into years, months, weeks, days and hours.
pub mod format;
/// Turns a line of text into a total.
///
/// This module ties together the lexer, the grammar state machine and the
/// evaluator that accumulates the result.
pub mod interpreter;
/// The working calendar: unit sizes and the [`units::Unit`] enum.
pub mod units;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::Error;
pub use format::{Estimate, format_hours};
pub use interpreter::evaluator::evaluate;
