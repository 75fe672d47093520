use crate::{
    ast::{ExprId, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, number::Number},
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation.
    ///
    /// Supported operators:
    /// - `Identity`: numbers unchanged, booleans as `1` or `0`.
    /// - `Negate`: numeric negation; integers are checked for overflow.
    /// - `Not`: boolean negation, or `x == 0` for numbers.
    /// - `BitNot`: bitwise complement of an integral value, boolean negation
    ///   for booleans.
    /// - `Abs`: the magnitude, see [`Evaluator::magnitude`].
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `operand`: Handle of the operand expression.
    pub(crate) fn eval_unary(&mut self, op: UnaryOperator, operand: ExprId) -> EvalResult<Value> {
        let value = self.eval(operand)?;

        match op {
            UnaryOperator::Identity => Ok(value.as_number()?.into_value()),
            UnaryOperator::Negate => Ok(negate(value.as_number()?)?.into_value()),
            UnaryOperator::Not => match value {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Ok(Value::Boolean(other.as_number()?.is_zero())),
            },
            UnaryOperator::BitNot => match value {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Ok(Value::Integer(!other.as_integer()?)),
            },
            UnaryOperator::Abs => self.magnitude(&value),
        }
    }

    /// Computes the magnitude of a value.
    ///
    /// Integers use a checked absolute value, reals and booleans their
    /// absolute value, complex numbers their modulus and vectors the
    /// Euclidean norm of their freshly evaluated elements.
    ///
    /// # Errors
    /// - `Overflow` for `|i64::MIN|`.
    /// - `ExpectedNumber` for functions, nothing, and vectors with
    ///   non-numeric elements.
    pub fn magnitude(&mut self, value: &Value) -> EvalResult<Value> {
        match value {
            Value::Integer(n) => Ok(Value::Integer(n.checked_abs().ok_or(RuntimeError::Overflow)?)),
            Value::Vector(elements) => {
                let mut sum_of_squares = 0.0;
                for &element in elements.iter() {
                    let modulus = self.eval_element(element)?.as_complex()?.modulus();
                    sum_of_squares += modulus * modulus;
                }
                Ok(Value::Real(sum_of_squares.sqrt()))
            },
            other => Ok(Value::Real(other.as_complex()?.modulus())),
        }
    }
}

fn negate(number: Number) -> Result<Number, RuntimeError> {
    match number {
        Number::Integer(n) => n.checked_neg().map(Number::Integer).ok_or(RuntimeError::Overflow),
        Number::Real(x) => Ok(Number::Real(-x)),
        Number::Complex(z) => Ok(Number::Complex(-z)),
    }
}
