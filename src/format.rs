use std::str::FromStr;

use crate::{error::Error, interpreter::evaluator::evaluate, units::Unit};

/// A signed total of working hours.
///
/// `Estimate` ties the two halves of the crate together: it parses from
/// estimate notation with [`FromStr`] and displays back in canonical
/// largest-unit-first form.
///
/// ## Example
/// ```
/// use estimate::Estimate;
///
/// let total: Estimate = "5w + 7d".parse().unwrap();
/// assert_eq!(total.hours(), 256);
/// assert_eq!(total.to_string(), "1m 2w 2d");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Estimate(pub i64);

impl Estimate {
    /// Returns the total in hours.
    #[must_use]
    pub const fn hours(self) -> i64 {
        self.0
    }
}

impl FromStr for Estimate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        evaluate(s).map(Self)
    }
}

impl std::fmt::Display for Estimate {
    /// Writes the total largest unit first, e.g. `1y 2w 3h`.
    ///
    /// The magnitude is decomposed once and the sign written once in front,
    /// so `-2h` is never rendered as a mix of signed segments. Zero-valued
    /// segments are omitted and a zero total is written as `0h`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return write!(f, "0h");
        }
        if self.0 < 0 {
            write!(f, "-")?;
        }

        let mut remaining = self.0.unsigned_abs();
        let mut first = true;
        for unit in Unit::DESCENDING {
            let size = unit.hours().unsigned_abs();
            let count = remaining / size;
            remaining %= size;
            if count == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{count}{}", unit.letter())?;
            first = false;
        }

        Ok(())
    }
}

/// Renders a signed number of hours in estimate notation.
///
/// # Examples
/// ```
/// use estimate::format_hours;
///
/// assert_eq!(format_hours(0), "0h");
/// assert_eq!(format_hours(-2), "-2h");
/// assert_eq!(format_hours(1920 + 9), "1y 1d 1h");
/// ```
#[must_use]
pub fn format_hours(hours: i64) -> String {
    Estimate(hours).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{HOURS_PER_DAY, HOURS_PER_MONTH, HOURS_PER_WEEK, HOURS_PER_YEAR};

    #[test]
    fn zero_is_zero_hours() {
        assert_eq!(format_hours(0), "0h");
    }

    #[test]
    fn less_than_a_day_is_hours_only() {
        assert_eq!(format_hours(7), "7h");
    }

    #[test]
    fn exact_units_have_one_segment() {
        assert_eq!(format_hours(HOURS_PER_DAY), "1d");
        assert_eq!(format_hours(HOURS_PER_WEEK), "1w");
        assert_eq!(format_hours(HOURS_PER_MONTH), "1m");
        assert_eq!(format_hours(HOURS_PER_YEAR), "1y");
    }

    #[test]
    fn zero_segments_are_skipped() {
        assert_eq!(format_hours(256), "1m 2w 2d");
        assert_eq!(format_hours(HOURS_PER_YEAR + 3), "1y 3h");
    }

    #[test]
    fn sign_is_written_once() {
        assert_eq!(format_hours(-2), "-2h");
        assert_eq!(format_hours(-(HOURS_PER_WEEK + HOURS_PER_DAY + 1)), "-1w 1d 1h");
    }

    #[test]
    fn extreme_values_do_not_panic() {
        assert!(format_hours(i64::MIN).starts_with('-'));
        assert!(!format_hours(i64::MAX).is_empty());
    }

    #[test]
    fn parses_through_from_str() {
        assert_eq!("1d 2h".parse::<Estimate>(), Ok(Estimate(10)));
        assert!("2x".parse::<Estimate>().is_err());
    }
}
