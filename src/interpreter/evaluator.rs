/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], the dispatch over expression kinds, the
/// nesting guard and the [`core::Interrupt`] type that carries errors and
/// control signals out of an evaluation.
pub mod core;

/// Name bindings.
///
/// A stack of frames searched innermost first. The global frame holds the
/// built-in constants and everything bound with `let` at top level.
pub mod environment;

/// Unary operator evaluation.
///
/// Implements identity, negation, logical not, bitwise complement and the
/// magnitude computed by `|x|` blocks.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic with numeric coercion, comparisons, assertions,
/// vector indexing and the dot product.
pub mod binary;

/// Function calls.
///
/// Holds the built-in function table and the calling convention for
/// user functions.
pub mod function;
