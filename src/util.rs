/// Numeric conversion helpers.
///
/// This module provides checked conversions between the unsigned counts read
/// from the input and the signed hour totals the evaluator accumulates, so
/// an oversized term is reported instead of wrapping silently.
pub mod num;
