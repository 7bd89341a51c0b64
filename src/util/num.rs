use crate::error::RuntimeError;

/// Safely converts a `u64` count to `i64` if it fits.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `i64::MAX`.
///
/// ## Parameters
/// - `value`: The unsigned count to convert.
/// - `column`: Source column for error reporting.
///
/// ## Example
/// ```
/// use estimate::{error::RuntimeError, util::num::u64_to_i64_checked};
///
/// assert_eq!(u64_to_i64_checked(42, 1), Ok(42));
///
/// let err = u64_to_i64_checked(u64::MAX, 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { column: 3 }));
/// ```
pub fn u64_to_i64_checked(value: u64, column: usize) -> Result<i64, RuntimeError> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { column })
}

/// Multiplies a count of units by the unit's size in hours.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the count does not fit in an `i64` or
/// the product does not.
///
/// ## Example
/// ```
/// use estimate::util::num::scale_checked;
///
/// assert_eq!(scale_checked(3, 40, 1), Ok(120));
/// assert!(scale_checked(u64::MAX / 2, 1920, 1).is_err());
/// ```
pub fn scale_checked(count: u64, hours_per_unit: i64, column: usize) -> Result<i64, RuntimeError> {
    u64_to_i64_checked(count, column)?.checked_mul(hours_per_unit)
                                      .ok_or(RuntimeError::Overflow { column })
}
