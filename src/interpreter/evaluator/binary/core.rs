use crate::{
    ast::{BinaryOperator, ExprId},
    interpreter::{
        evaluator::{
            binary::arithmetic::apply_arithmetic,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation.
    ///
    /// Calls, indexing and the dot product receive the operand handles and
    /// decide themselves what to evaluate. Every other operator evaluates
    /// the left operand, then the right one.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Handle of the left operand.
    /// - `right`: Handle of the right operand.
    ///
    /// # Returns
    /// The result of the operation.
    pub(crate) fn eval_binary(&mut self,
                              op: BinaryOperator,
                              left: ExprId,
                              right: ExprId)
                              -> EvalResult<Value> {
        use BinaryOperator::{
            Add, AssertEqual, Call, Div, Dot, Equal, ExactEqual, ExactNotEqual, Greater,
            GreaterEqual, Index, Less, LessEqual, Mod, Mul, NotEqual, Pow, Root, Sub,
        };

        match op {
            Call => self.eval_call(left, right),
            Index => self.eval_index(left, right),
            Dot => self.eval_dot(left, right),
            Add | Sub | Mul | Div | Mod | Pow | Root => {
                let lhs = self.eval(left)?.as_number()?;
                let rhs = self.eval(right)?.as_number()?;
                Ok(apply_arithmetic(op, lhs, rhs)?.into_value())
            },
            Less | Greater | LessEqual | GreaterEqual => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Ok(Value::Boolean(Self::compare(op, &lhs, &rhs)?))
            },
            Equal | NotEqual => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                let equal = self.values_equal(&lhs, &rhs, false)?;
                Ok(Value::Boolean(equal == (op == Equal)))
            },
            ExactEqual | ExactNotEqual => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                let equal = self.values_equal(&lhs, &rhs, true)?;
                Ok(Value::Boolean(equal == (op == ExactEqual)))
            },
            AssertEqual => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                self.assert_equal(&lhs, &rhs)
            },
        }
    }
}
