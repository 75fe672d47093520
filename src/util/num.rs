use crate::error::RuntimeError;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// `RuntimeError::Overflow` if the magnitude exceeds [`MAX_SAFE_INT`].
///
/// ## Example
/// ```
/// use calx::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42).unwrap(), 42.0);
///
/// let big = MAX_SAFE_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_checked(value: i64) -> Result<f64, RuntimeError> {
    if value.unsigned_abs() > MAX_SAFE_INT {
        return Err(RuntimeError::Overflow);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` if the value is finite, integral and in range.
///
/// ## Errors
/// - `RuntimeError::InvalidArgument` for non-finite or fractional values.
/// - `RuntimeError::Overflow` for values outside the `i64` range.
///
/// ## Example
/// ```
/// use calx::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(1000.0).unwrap(), 1000);
/// assert!(matches!(f64_to_i64_checked(1.5), Err(RuntimeError::InvalidArgument { .. })));
/// assert!(matches!(f64_to_i64_checked(1e20), Err(RuntimeError::Overflow)));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> Result<i64, RuntimeError> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is not a finite number") });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is not an integer") });
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow);
    }
    Ok(value as i64)
}

/// Converts a length to `i64`.
///
/// ## Errors
/// `RuntimeError::Overflow` if the length does not fit.
pub fn usize_to_i64_checked(value: usize) -> Result<i64, RuntimeError> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Resolves a zero-based index into a collection of length `len`.
///
/// ## Errors
/// `RuntimeError::IndexOutOfBounds` for negative indices and indices at or
/// past `len`.
///
/// ## Example
/// ```
/// use calx::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 3).unwrap(), 2);
/// assert!(checked_index(3, 3).is_err());
/// assert!(checked_index(-1, 3).is_err());
/// ```
pub fn checked_index(index: i64, len: usize) -> Result<usize, RuntimeError> {
    usize::try_from(index).ok()
                          .filter(|&i| i < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { len,
                                                                  found: index })
}
