/// Numeric conversion helpers.
///
/// Conversions between `i64`, `usize` and `f64` that either succeed without
/// losing information or report a [`RuntimeError`](crate::error::RuntimeError).
pub mod num;
