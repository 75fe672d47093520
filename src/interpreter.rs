/// Tree-walking evaluation.
///
/// The evaluator walks expression trees stored in an arena and produces
/// runtime values. It resolves names through a stack of binding frames,
/// applies numeric coercion for arithmetic and dispatches function calls to
/// built-ins or user functions.
///
/// # Responsibilities
/// - Evaluates every expression kind and operator.
/// - Re-evaluates vector elements each time a vector is inspected.
/// - Reports runtime errors and surfaces `quit()`/`clear()` as control
///   signals.
pub mod evaluator;
/// Tokenization.
///
/// Turns source text into a stream of tokens, one at a time, with a single
/// token of lookahead. Unknown characters are skipped with a warning.
pub mod lexer;
/// Parsing.
///
/// Builds expression trees from the token stream with precedence climbing,
/// including implicit multiplication and absolute-value blocks.
pub mod parser;
/// Value rendering.
///
/// Formats values for display according to the session configuration and
/// renders parsed expressions as indented trees.
pub mod printer;
/// Sessions.
///
/// Ties the arena, the bindings, the configuration and an output sink
/// together and runs batches of statements.
pub mod session;
/// Runtime values and numeric types.
pub mod value;
