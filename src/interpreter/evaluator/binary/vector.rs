use crate::{
    ast::{BinaryOperator, ExprId},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::arithmetic::apply_arithmetic,
            core::{EvalResult, Evaluator},
        },
        value::{core::Value, number::Number},
    },
    util::num::checked_index,
};

impl Evaluator<'_> {
    /// Evaluates `v.n`, zero-based indexing into a vector.
    ///
    /// Only the selected element is evaluated.
    ///
    /// # Errors
    /// - `TypeError` if the left operand is not a vector.
    /// - `InvalidArgument` if the index is not integral.
    /// - `IndexOutOfBounds` if the index is negative or past the end.
    pub(crate) fn eval_index(&mut self, vector: ExprId, index: ExprId) -> EvalResult<Value> {
        let elements = match self.eval(vector)? {
            Value::Vector(elements) => elements,
            other => {
                return Err(RuntimeError::TypeError { details: format!("cannot index into a {}",
                                                                      other.type_name()) }.into());
            },
        };
        let index = self.eval(index)?.as_integer()?;
        let position = checked_index(index, elements.len())?;

        self.eval_element(elements[position])
    }

    /// Evaluates `a @ b`, the dot product of two vectors.
    ///
    /// Element products are summed with the ordinary arithmetic rules, so
    /// integer vectors give an integer and complex entries give a complex
    /// result. The product of two empty vectors is `0`.
    ///
    /// # Errors
    /// - `TypeError` if either operand is not a vector.
    /// - `LengthMismatch` if the vectors differ in length.
    pub(crate) fn eval_dot(&mut self, left: ExprId, right: ExprId) -> EvalResult<Value> {
        let (a, b) = match (self.eval(left)?, self.eval(right)?) {
            (Value::Vector(a), Value::Vector(b)) => (a, b),
            (a, b) => {
                return Err(RuntimeError::TypeError { details: format!("dot product needs two vectors, found {} and {}",
                                                                      a.type_name(),
                                                                      b.type_name()) }.into());
            },
        };
        if a.len() != b.len() {
            return Err(RuntimeError::LengthMismatch { left:  a.len(),
                                                      right: b.len(), }.into());
        }

        let mut sum: Option<Number> = None;
        for (&x, &y) in a.iter().zip(b.iter()) {
            let x = self.eval_element(x)?.as_number()?;
            let y = self.eval_element(y)?.as_number()?;
            let product = apply_arithmetic(BinaryOperator::Mul, x, y)?;
            sum = Some(match sum {
                Some(total) => apply_arithmetic(BinaryOperator::Add, total, product)?,
                None => product,
            });
        }

        Ok(sum.unwrap_or(Number::Integer(0)).into_value())
    }
}
