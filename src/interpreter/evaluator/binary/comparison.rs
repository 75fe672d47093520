use std::{cmp::Ordering, mem, rc::Rc};

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, number::Number},
    },
};

impl Evaluator<'_> {
    /// Evaluates an ordering comparison (`<`, `>`, `<=`, `>=`).
    ///
    /// Two integers compare exactly; other orderable pairs compare as reals,
    /// with booleans counting as `1` and `0`.
    ///
    /// # Errors
    /// `NotOrderable` if either operand is complex, a vector, a function or
    /// nothing.
    ///
    /// # Example
    /// ```
    /// use calx::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let less = Evaluator::compare(BinaryOperator::Less, &Value::Integer(2), &Value::Real(2.5));
    /// assert!(less.unwrap());
    ///
    /// let complex = Value::Complex(calx::interpreter::value::complex::ComplexNumber::I);
    /// assert!(Evaluator::compare(BinaryOperator::Less, &Value::Real(3.0), &complex).is_err());
    /// ```
    pub fn compare(op: BinaryOperator, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
        if !left.is_orderable() || !right.is_orderable() {
            return Err(RuntimeError::NotOrderable { left:  left.type_name(),
                                                    right: right.type_name(), });
        }

        let ordering = match (left.as_number()?, right.as_number()?) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_real()?.partial_cmp(&b.to_real()?),
        };

        Ok(match op {
            BinaryOperator::Less => ordering == Some(Ordering::Less),
            BinaryOperator::Greater => ordering == Some(Ordering::Greater),
            BinaryOperator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            BinaryOperator::GreaterEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not an ordering operator") });
            },
        })
    }

    /// Tests two values for equality.
    ///
    /// Loose equality compares numbers after coercion, so `true == 1` holds.
    /// Vectors are equal when they have the same length and their freshly
    /// evaluated elements are pairwise equal. Functions are equal only to
    /// themselves and `Nothing` only to `Nothing`. Exact equality also
    /// requires both values, and all vector elements, to be of the same
    /// kind.
    ///
    /// # Parameters
    /// - `left`, `right`: The values to compare.
    /// - `exact`: Whether the kinds must match.
    pub(crate) fn values_equal(&mut self, left: &Value, right: &Value, exact: bool) -> EvalResult<bool> {
        if exact && mem::discriminant(left) != mem::discriminant(right) {
            return Ok(false);
        }

        match (left, right) {
            (Value::Vector(a), Value::Vector(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (&x, &y) in a.iter().zip(b.iter()) {
                    let x = self.eval_element(x)?;
                    let y = self.eval_element(y)?;
                    if !self.values_equal(&x, &y, exact)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },
            (Value::Function(a), Value::Function(b)) => Ok(Rc::ptr_eq(a, b)),
            (Value::Nothing, Value::Nothing) => Ok(true),
            _ => match (left.as_number(), right.as_number()) {
                (Ok(a), Ok(b)) => Ok(a.numerically_equals(b)),
                _ => Ok(false),
            },
        }
    }

    /// Evaluates an `a = b` assertion.
    ///
    /// # Returns
    /// `Boolean(true)` when the operands are loosely equal.
    ///
    /// # Errors
    /// `AssertionFailed` carrying the rendering of both operands otherwise.
    pub(crate) fn assert_equal(&mut self, left: &Value, right: &Value) -> EvalResult<Value> {
        if self.values_equal(left, right, false)? {
            return Ok(Value::Boolean(true));
        }

        let left = self.render(left)?;
        let right = self.render(right)?;
        log::debug!("assertion failed: {left} = {right}");
        Err(RuntimeError::AssertionFailed { left, right }.into())
    }
}
