/// Complex number support.
///
/// Defines the `ComplexNumber` type with its arithmetic operators and the
/// elementary functions (`sqrt`, `exp`, `ln`, trigonometry, powers) used
/// when an operation involves a genuinely complex operand.
pub mod complex;
/// Runtime values.
///
/// Declares the `Value` enum produced by evaluation, and the
/// `FunctionObject` carried by function values.
pub mod core;
/// Numeric coercion.
///
/// Every arithmetic operator and numeric built-in first turns its operands
/// into a `Number`: booleans become `1.0` or `0.0`, integers, reals and
/// complex numbers stay what they are, and anything else is rejected.
pub mod number;
