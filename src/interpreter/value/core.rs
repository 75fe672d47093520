use std::rc::Rc;

use crate::{
    ast::ExprId,
    error::RuntimeError,
    interpreter::value::{complex::ComplexNumber, number::Number},
    util::num::f64_to_i64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// Values are never re-evaluated, with one exception: a vector stores the
/// handles of its element expressions, and every inspection of the vector
/// evaluates them again.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer, produced by indices, `int` and `len`.
    Integer(i64),
    /// A double precision real.
    Real(f64),
    /// A complex number with a non-zero imaginary part.
    Complex(ComplexNumber),
    /// `true` or `false`. Produced by comparisons and `!`.
    Boolean(bool),
    /// A vector of unevaluated element expressions.
    Vector(Rc<[ExprId]>),
    /// A function created by the `func` built-in.
    Function(Rc<FunctionObject>),
    /// The result of a statement evaluated only for its effect.
    Nothing,
}

/// A user function: parameter names and a body expression.
///
/// The body is evaluated in a fresh frame holding the parameters; any other
/// name resolves through the caller's frames at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionObject {
    /// Parameter names, in positional order.
    pub params: Vec<String>,
    /// The body expression.
    pub body:   ExprId,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<ComplexNumber> for Value {
    fn from(z: ComplexNumber) -> Self {
        Number::Complex(z).into_value()
    }
}

impl Value {
    /// Name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Complex(_) => "complex",
            Self::Boolean(_) => "boolean",
            Self::Vector(_) => "vector",
            Self::Function(_) => "function",
            Self::Nothing => "nothing",
        }
    }

    /// Applies numeric coercion.
    ///
    /// # Returns
    /// - `Ok(Number)`: Booleans as `1.0` or `0.0`, numbers unchanged.
    /// - `Err(RuntimeError::ExpectedNumber)`: For vectors, functions and
    ///   nothing.
    ///
    /// ## Example
    /// ```
    /// use calx::interpreter::value::{core::Value, number::Number};
    ///
    /// assert_eq!(Value::Boolean(true).as_number().unwrap(), Number::Real(1.0));
    /// assert!(Value::Nothing.as_number().is_err());
    /// ```
    pub const fn as_number(&self) -> Result<Number, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(Number::Integer(*n)),
            Self::Real(x) => Ok(Number::Real(*x)),
            Self::Complex(z) => Ok(Number::Complex(*z)),
            Self::Boolean(b) => Ok(Number::Real(if *b { 1.0 } else { 0.0 })),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name() }),
        }
    }

    /// Reads the value as a real.
    ///
    /// # Errors
    /// - `ExpectedNumber` for non-numeric values.
    /// - `ComplexNotReal` for complex values; they are never truncated.
    pub fn as_real(&self) -> Result<f64, RuntimeError> {
        self.as_number()?.to_real()
    }

    /// Reads the value as a complex number.
    ///
    /// # Errors
    /// `ExpectedNumber` for non-numeric values.
    pub fn as_complex(&self) -> Result<ComplexNumber, RuntimeError> {
        self.as_number()?.to_complex()
    }

    /// Reads an integral value as an `i64`.
    ///
    /// # Errors
    /// - `ExpectedNumber` or `ComplexNotReal` as for [`Value::as_real`].
    /// - `InvalidArgument` for a fractional or non-finite real.
    /// - `Overflow` for a real outside the `i64` range.
    pub fn as_integer(&self) -> Result<i64, RuntimeError> {
        match self.as_number()? {
            Number::Integer(n) => Ok(n),
            number => f64_to_i64_checked(number.to_real()?),
        }
    }

    /// Returns `true` for values with a total order: integers, reals and
    /// booleans.
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_) | Self::Boolean(_))
    }
}
