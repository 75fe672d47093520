use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::{complex::ComplexNumber, number::Number},
    util::num::i64_to_f64_checked,
};

/// Applies an arithmetic operator to two coerced operands.
///
/// - Two integers stay integral with checked overflow. `/` truncates toward
///   zero and `%` is the remainder. A negative exponent leaves the integers
///   and continues on reals.
/// - If either operand is complex the operation is complex.
/// - Otherwise both operands are read as reals. A negative base raised to a
///   fractional power continues as complex.
///
/// `a root b` is `a ^ (1 / b)`.
///
/// # Errors
/// - `DivisionByZero` for `/`, `%` or `root` with a zero right operand, and
///   for zero raised to a negative power.
/// - `Overflow` when integer arithmetic overflows.
/// - `TypeError` for `%` on complex operands.
/// - `TypeError` if `op` is not arithmetic.
///
/// # Example
/// ```
/// use calx::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::apply_arithmetic, value::number::Number},
/// };
///
/// let seven = apply_arithmetic(BinaryOperator::Div, Number::Integer(15), Number::Integer(2));
/// assert_eq!(seven.unwrap(), Number::Integer(7));
///
/// let two = apply_arithmetic(BinaryOperator::Root, Number::Real(8.0), Number::Real(3.0));
/// assert_eq!(two.unwrap(), Number::Real(2.0));
/// ```
pub fn apply_arithmetic(op: BinaryOperator, lhs: Number, rhs: Number) -> Result<Number, RuntimeError> {
    if !op.is_arithmetic() {
        return Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator") });
    }

    match (lhs, rhs) {
        (Number::Integer(a), Number::Integer(b)) => integer_arithmetic(op, a, b),
        (Number::Complex(_), _) | (_, Number::Complex(_)) => {
            complex_arithmetic(op, lhs.to_complex()?, rhs.to_complex()?)
        },
        _ => real_arithmetic(op, lhs.to_real()?, rhs.to_real()?),
    }
}

fn integer_arithmetic(op: BinaryOperator, a: i64, b: i64) -> Result<Number, RuntimeError> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div | BinaryOperator::Mod if b == 0 => {
            return Err(RuntimeError::DivisionByZero);
        },
        BinaryOperator::Div => a.checked_div(b),
        BinaryOperator::Mod => a.checked_rem(b),
        BinaryOperator::Pow if b >= 0 => {
            let exponent = u32::try_from(b).map_err(|_| RuntimeError::Overflow)?;
            a.checked_pow(exponent)
        },
        _ => return real_arithmetic(op, i64_to_f64_checked(a)?, i64_to_f64_checked(b)?),
    };

    result.map(Number::Integer).ok_or(RuntimeError::Overflow)
}

fn real_arithmetic(op: BinaryOperator, a: f64, b: f64) -> Result<Number, RuntimeError> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div | BinaryOperator::Mod | BinaryOperator::Root if b == 0.0 => {
            return Err(RuntimeError::DivisionByZero);
        },
        BinaryOperator::Div => a / b,
        BinaryOperator::Mod => a % b,
        BinaryOperator::Pow => return real_power(a, b),
        BinaryOperator::Root => return real_power(a, b.recip()),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator") });
        },
    };

    Ok(Number::Real(result))
}

fn real_power(base: f64, exponent: f64) -> Result<Number, RuntimeError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return complex_arithmetic(BinaryOperator::Pow,
                                  ComplexNumber::from(base),
                                  ComplexNumber::from(exponent));
    }

    Ok(Number::Real(base.powf(exponent)))
}

fn complex_arithmetic(op: BinaryOperator,
                      a: ComplexNumber,
                      b: ComplexNumber)
                      -> Result<Number, RuntimeError> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div | BinaryOperator::Root if b.is_zero() => {
            return Err(RuntimeError::DivisionByZero);
        },
        BinaryOperator::Div => a / b,
        BinaryOperator::Pow if a.is_zero() && b.real < 0.0 => {
            return Err(RuntimeError::DivisionByZero);
        },
        BinaryOperator::Pow => a.pow(b),
        BinaryOperator::Root => a.pow(ComplexNumber::ONE / b),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("'{op}' is not defined for complex numbers") });
        },
    };

    Ok(Number::Complex(result))
}
