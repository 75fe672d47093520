use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{complex::ComplexNumber, core::Value, number::Number},
    },
    util::num::{f64_to_i64_checked, usize_to_i64_checked},
};

/// Applies a function with a real and a complex form.
///
/// Complex arguments use the complex variant and collapse back to a real
/// when the imaginary part of the result is zero. Every other numeric
/// argument is read as a real.
macro_rules! real_complex_builtin {
    ($fname:ident, $real_fn:ident, $complex_fn:ident) => {
        pub fn $fname(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
            match args[0].as_number()? {
                Number::Complex(z) => Ok(Value::from(z.$complex_fn())),
                number => Ok(Value::Real(number.to_real()?.$real_fn())),
            }
        }
    };
}

real_complex_builtin!(exp, exp, exp);
real_complex_builtin!(sin, sin, sin);
real_complex_builtin!(cos, cos, cos);
real_complex_builtin!(tan, tan, tan);

/// Rounds a real toward an integral value. Integers pass through.
macro_rules! rounding_builtin {
    ($fname:ident) => {
        pub fn $fname(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
            match args[0].as_number()? {
                Number::Integer(n) => Ok(Value::Integer(n)),
                number => Ok(Value::Real(number.to_real()?.$fname())),
            }
        }
    };
}

rounding_builtin!(floor);
rounding_builtin!(ceil);
rounding_builtin!(round);

/// Square root. Negative reals give an imaginary result.
///
/// ## Example
/// ```
/// use calx::interpreter::{
///     evaluator::function::math::sqrt,
///     value::{complex::ComplexNumber, core::Value},
/// };
/// # use calx::{ast::Arena, config::Config, interpreter::evaluator::{core::Evaluator, environment::Environment}};
/// # let arena = Arena::new();
/// # let mut env = Environment::new();
/// # let config = Config::default();
/// # let mut output = Vec::new();
/// # let mut newline = true;
/// # let mut evaluator = Evaluator::new(&arena, &mut env, &config, &mut output, &mut newline);
///
/// assert_eq!(sqrt(&mut evaluator, &[Value::Real(9.0)]).unwrap(), Value::Real(3.0));
/// assert_eq!(sqrt(&mut evaluator, &[Value::Real(-4.0)]).unwrap(),
///            Value::Complex(ComplexNumber::new(0.0, 2.0)));
/// ```
pub fn sqrt(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    match args[0].as_number()? {
        Number::Complex(z) => Ok(Value::from(z.sqrt())),
        number => {
            let x = number.to_real()?;
            if x < 0.0 {
                Ok(Value::Complex(ComplexNumber::new(0.0, (-x).sqrt())))
            } else {
                Ok(Value::Real(x.sqrt()))
            }
        },
    }
}

/// Natural logarithm. Negative reals give the principal complex logarithm.
pub fn ln(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    match args[0].as_number()? {
        Number::Complex(z) => Ok(Value::from(z.ln())),
        number => {
            let x = number.to_real()?;
            if x < 0.0 {
                Ok(Value::from(ComplexNumber::from(x).ln()))
            } else {
                Ok(Value::Real(x.ln()))
            }
        },
    }
}

/// Magnitude, the same as an `|x|` block.
pub fn abs(evaluator: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    evaluator.magnitude(&args[0])
}

/// Real part.
pub fn re(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_complex()?.real))
}

/// Imaginary part.
pub fn im(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_complex()?.imaginary))
}

/// Phase angle in radians.
pub fn arg(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_complex()?.arg()))
}

/// Complex conjugate. Reals are their own conjugate.
pub fn conj(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    match args[0].as_number()? {
        Number::Complex(z) => Ok(Value::from(z.conj())),
        number => Ok(number.into_value()),
    }
}

/// Truncates toward zero and returns an integer.
///
/// # Errors
/// - `InvalidArgument` for infinities and NaN.
/// - `Overflow` outside the `i64` range.
pub fn int(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    match args[0].as_number()? {
        Number::Integer(n) => Ok(Value::Integer(n)),
        number => Ok(Value::Integer(f64_to_i64_checked(number.to_real()?.trunc())?)),
    }
}

/// Number of elements of a vector.
pub fn len(_: &mut Evaluator<'_>, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Vector(elements) => Ok(Value::Integer(usize_to_i64_checked(elements.len())?)),
        other => Err(RuntimeError::TypeError { details: format!("len expects a vector, found {}",
                                                                other.type_name()) }.into()),
    }
}
