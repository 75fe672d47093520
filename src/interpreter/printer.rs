use std::fmt::Write;

use crate::{
    ast::{Arena, Expr, ExprId},
    config::Config,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Indentation added per level by [`render_tree`].
const TREE_INDENT: usize = 4;

impl Evaluator<'_> {
    /// Renders a value as text.
    ///
    /// - Integers in decimal.
    /// - Reals through [`format_real`].
    /// - Complex numbers as the real part followed by the signed imaginary
    ///   part and `i`, e.g. `1+2i`.
    /// - Booleans as `true`/`false`, or as `1`/`0` with
    ///   [`Config::bools_as_numbers`].
    /// - Vectors as `[a, b, c]` of freshly evaluated elements.
    /// - Functions as `<function(x, y)>`.
    /// - Nothing as an empty string.
    ///
    /// # Errors
    /// Any error raised while evaluating vector elements.
    pub fn render(&mut self, value: &Value) -> EvalResult<String> {
        Ok(match value {
            Value::Integer(n) => n.to_string(),
            Value::Real(x) => format_real(*x, self.config),
            Value::Complex(z) => format_complex(*z, self.config),
            Value::Boolean(b) if self.config.bools_as_numbers => {
                format_real(if *b { 1.0 } else { 0.0 }, self.config)
            },
            Value::Boolean(b) => b.to_string(),
            Value::Vector(elements) => {
                let mut rendered = Vec::with_capacity(elements.len());
                for &element in elements.iter() {
                    rendered.push(self.nested(|evaluator| {
                                          let value = evaluator.eval(element)?;
                                          evaluator.render(&value)
                                      })?);
                }
                format!("[{}]", rendered.join(", "))
            },
            Value::Function(function) => format!("<function({})>", function.params.join(", ")),
            Value::Nothing => String::new(),
        })
    }
}

/// Formats a real number for display.
///
/// With a [`Config::precision`] this behaves like C's `%.*g`, or `%.*f` with
/// [`Config::full_precision`]: `precision` counts significant digits,
/// trailing zeros are dropped, and scientific notation is used when the
/// decimal exponent is below `-4` or at least `precision`.
///
/// Without one, the shortest digits that parse back to the same `f64` are
/// printed, switching to scientific notation outside `1e-4..1e17`.
///
/// ## Example
/// ```
/// use calx::{config::Config, interpreter::printer::format_real};
///
/// let config = Config::default();
/// assert_eq!(format_real(14.0, &config), "14");
/// assert_eq!(format_real(0.1 + 0.2, &config), "0.30000000000000004");
/// assert_eq!(format_real(1e20, &config), "1e+20");
/// assert_eq!(format_real(0.00001234, &config), "1.234e-05");
///
/// let short = Config { precision: Some(10),
///                      ..Config::default() };
/// assert_eq!(format_real(0.1 + 0.2, &short), "0.3");
///
/// let fixed = Config { precision: Some(3),
///                      full_precision: true,
///                      ..Config::default() };
/// assert_eq!(format_real(2.0, &fixed), "2.000");
/// ```
#[must_use]
pub fn format_real(value: f64, config: &Config) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    match (config.precision, config.full_precision) {
        (Some(precision), true) => format!("{value:.precision$}"),
        (None, true) => format!("{value}"),
        (Some(precision), false) => format_general(value, precision.max(1)),
        (None, false) => format_shortest(value),
    }
}

/// Exponent from which [`format_shortest`] leaves fixed notation; no `f64`
/// has more significant digits than this.
const SHORTEST_FIXED_LIMIT: i64 = 17;

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

fn signed_zero(value: f64) -> String {
    if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() }
}

fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return signed_zero(value);
    }

    // Rounding to `precision` significant digits decides the exponent.
    let scientific = format!("{value:.*e}", precision - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let max_exponent = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= max_exponent {
        exponent_notation(mantissa, exponent)
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn format_shortest(value: f64) -> String {
    if value == 0.0 {
        return signed_zero(value);
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);

    if (-4..SHORTEST_FIXED_LIMIT).contains(&exponent) {
        format!("{value}")
    } else {
        exponent_notation(mantissa, exponent)
    }
}

/// `1.5e+20` style, with at least two exponent digits.
fn exponent_notation(mantissa: &str, exponent: i64) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
}

/// Drops trailing zeros after a decimal point, and the point itself.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn format_complex(z: ComplexNumber, config: &Config) -> String {
    let real = format_real(z.real, config);
    let imaginary = format_real(z.imaginary, config);
    let sign = if imaginary.starts_with('-') { "" } else { "+" };

    format!("{real}{sign}{imaginary}i")
}

/// Renders an expression tree, one node per line, children indented.
///
/// ## Example
/// ```
/// use calx::{
///     ast::Arena,
///     config::Config,
///     interpreter::{parser::parse_expression, printer::render_tree},
/// };
///
/// let mut arena = Arena::new();
/// let id = parse_expression("2 + x", &mut arena).unwrap();
/// let tree = render_tree(&arena, &Config::default(), id).unwrap();
/// assert_eq!(tree, "Operation(Add,\n    Real(2),\n    Identifier('x'),\n)");
/// ```
///
/// # Errors
/// `ReleasedExpression` if a handle belongs to a released arena.
pub fn render_tree(arena: &Arena, config: &Config, id: ExprId) -> Result<String, RuntimeError> {
    let mut out = String::new();
    write_tree(arena, config, id, 0, &mut out)?;
    Ok(out)
}

fn write_tree(arena: &Arena,
              config: &Config,
              id: ExprId,
              indent: usize,
              out: &mut String)
              -> Result<(), RuntimeError> {
    let expr = arena.get(id).ok_or(RuntimeError::ReleasedExpression)?;
    out.push_str(&" ".repeat(indent));

    match expr {
        Expr::Integer(n) => {
            let _ = write!(out, "Integer({n})");
        },
        Expr::Real(x) => {
            let _ = write!(out, "Real({})", format_real(*x, config));
        },
        Expr::Identifier(name) => {
            let _ = write!(out, "Identifier('{name}')");
        },
        Expr::Vector(elements) => {
            let _ = writeln!(out, "Vector(n={},", elements.len());
            for &element in elements {
                write_tree(arena, config, element, indent + TREE_INDENT, out)?;
                out.push_str(",\n");
            }
            out.push_str(&" ".repeat(indent));
            out.push(')');
        },
        Expr::UnaryOp { op, operand } => {
            let _ = writeln!(out, "Operation({op},");
            write_tree(arena, config, *operand, indent + TREE_INDENT, out)?;
            out.push_str(",\n");
            out.push_str(&" ".repeat(indent));
            out.push(')');
        },
        Expr::BinaryOp { op, left, right } => {
            let _ = writeln!(out, "Operation({op:?},");
            write_tree(arena, config, *left, indent + TREE_INDENT, out)?;
            out.push_str(",\n");
            write_tree(arena, config, *right, indent + TREE_INDENT, out)?;
            out.push_str(",\n");
            out.push_str(&" ".repeat(indent));
            out.push(')');
        },
    }

    Ok(())
}
