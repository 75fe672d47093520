use crate::{
    error::RuntimeError,
    interpreter::value::{complex::ComplexNumber, core::Value},
    util::num::i64_to_f64_checked,
};

/// A value after numeric coercion.
///
/// Arithmetic dispatches on the pair of coerced operands: two integers stay
/// integral, a complex operand promotes the operation to complex arithmetic,
/// and everything else is carried out on reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit integer.
    Integer(i64),
    /// A double precision real.
    Real(f64),
    /// A complex number.
    Complex(ComplexNumber),
}

impl Number {
    /// Reads the number as a real.
    ///
    /// # Errors
    /// - `ComplexNotReal` for a complex number with a non-zero imaginary part.
    /// - `Overflow` for an integer that has no exact `f64` representation.
    pub fn to_real(self) -> Result<f64, RuntimeError> {
        match self {
            Self::Integer(n) => i64_to_f64_checked(n),
            Self::Real(x) => Ok(x),
            Self::Complex(z) if z.imaginary == 0.0 => Ok(z.real),
            Self::Complex(_) => Err(RuntimeError::ComplexNotReal),
        }
    }

    /// Widens the number to a complex number.
    ///
    /// # Errors
    /// `Overflow` for an integer that has no exact `f64` representation.
    pub fn to_complex(self) -> Result<ComplexNumber, RuntimeError> {
        match self {
            Self::Complex(z) => Ok(z),
            other => other.to_real().map(ComplexNumber::from),
        }
    }

    /// Returns `true` for an exact zero of any kind.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(x) => x == 0.0,
            Self::Complex(z) => z.is_zero(),
        }
    }

    /// Returns `true` when `self` and `other` denote the same number.
    ///
    /// Two integers compare exactly; any other pair is compared part by part
    /// as complex numbers.
    ///
    /// ## Example
    /// ```
    /// use calx::interpreter::value::number::Number;
    ///
    /// assert!(Number::Integer(2).numerically_equals(Number::Real(2.0)));
    /// assert!(!Number::Real(0.5).numerically_equals(Number::Integer(0)));
    /// ```
    #[must_use]
    pub fn numerically_equals(self, other: Self) -> bool {
        if let (Self::Integer(a), Self::Integer(b)) = (self, other) {
            return a == b;
        }
        match (self.to_complex(), other.to_complex()) {
            (Ok(a), Ok(b)) => a.real == b.real && a.imaginary == b.imaginary,
            _ => false,
        }
    }

    /// Converts the number back into a value.
    ///
    /// A complex number whose imaginary part is exactly zero collapses to a
    /// real.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Integer(n) => Value::Integer(n),
            Self::Real(x) => Value::Real(x),
            Self::Complex(z) if z.imaginary == 0.0 => Value::Real(z.real),
            Self::Complex(z) => Value::Complex(z),
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        number.into_value()
    }
}
