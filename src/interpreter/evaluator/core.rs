use std::io::Write;

use crate::{
    ast::{Arena, Expr, ExprId},
    config::Config,
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::core::Value},
};

/// Maximum nesting of function calls and vector element evaluations.
pub const MAX_DEPTH: usize = 256;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Interrupt`] that stops the current statement.
pub type EvalResult<T> = Result<T, Interrupt>;

/// A request from the evaluated program to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// Stop processing input (`quit()` or `exit()`).
    Quit,
    /// Clear the terminal (`clear()`).
    ClearScreen,
}

/// Anything that ends the evaluation of a statement early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interrupt {
    /// The program asked the host to do something.
    Control(ControlSignal),
    /// Evaluation failed.
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl From<std::io::Error> for Interrupt {
    fn from(error: std::io::Error) -> Self {
        Self::Error(error.into())
    }
}

/// Tree-walking evaluator over one arena.
///
/// The evaluator borrows everything it works on: the arena holding the
/// expressions, the binding environment, the printing configuration and the
/// output sink together with its "ended with a newline" flag.
///
/// ## Example
/// ```
/// use calx::{
///     ast::Arena,
///     config::Config,
///     interpreter::{
///         evaluator::{core::Evaluator, environment::Environment},
///         parser::parse_expression,
///         value::core::Value,
///     },
/// };
///
/// let mut arena = Arena::new();
/// let id = parse_expression("2 + 3 * 4", &mut arena).unwrap();
///
/// let mut env = Environment::new();
/// let config = Config::default();
/// let mut output = Vec::new();
/// let mut ended_with_newline = true;
///
/// let mut evaluator = Evaluator::new(&arena, &mut env, &config, &mut output, &mut ended_with_newline);
/// assert_eq!(evaluator.eval(id).unwrap(), Value::Real(14.0));
/// ```
pub struct Evaluator<'a> {
    pub(crate) arena:  &'a Arena,
    pub(crate) env:    &'a mut Environment,
    pub(crate) config: &'a Config,
    output:             &'a mut dyn Write,
    ended_with_newline: &'a mut bool,
    depth:              usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator at nesting depth zero.
    pub fn new(arena: &'a Arena,
               env: &'a mut Environment,
               config: &'a Config,
               output: &'a mut dyn Write,
               ended_with_newline: &'a mut bool)
               -> Self {
        Self { arena,
               env,
               config,
               output,
               ended_with_newline,
               depth: 0 }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals evaluate to themselves, identifiers resolve through the
    /// environment and a vector literal becomes a [`Value::Vector`] whose
    /// elements stay unevaluated.
    ///
    /// # Errors
    /// - `Interrupt::Error` when evaluation fails.
    /// - `Interrupt::Control` when a built-in such as `quit()` runs.
    pub fn eval(&mut self, id: ExprId) -> EvalResult<Value> {
        match self.node(id)? {
            Expr::Integer(n) => Ok(Value::Integer(*n)),
            Expr::Real(x) => Ok(Value::Real(*x)),
            Expr::Identifier(name) => self.eval_identifier(name),
            Expr::Vector(elements) => Ok(Value::Vector(elements.as_slice().into())),
            Expr::UnaryOp { op, operand } => self.eval_unary(*op, *operand),
            Expr::BinaryOp { op, left, right } => self.eval_binary(*op, *left, *right),
        }
    }

    /// Evaluates one element of a vector value.
    ///
    /// Counts toward the nesting limit, since a vector may contain itself
    /// through a binding.
    pub fn eval_element(&mut self, id: ExprId) -> EvalResult<Value> {
        self.nested(|evaluator| evaluator.eval(id))
    }

    /// Looks up a node in the arena.
    ///
    /// # Errors
    /// `ReleasedExpression` if the handle belongs to a released arena
    /// generation.
    pub(crate) fn node(&self, id: ExprId) -> Result<&'a Expr, RuntimeError> {
        self.arena.get(id).ok_or(RuntimeError::ReleasedExpression)
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// # Errors
    /// `RecursionLimit` once [`MAX_DEPTH`] levels are active.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> EvalResult<T>) -> EvalResult<T> {
        if self.depth >= MAX_DEPTH {
            return Err(RuntimeError::RecursionLimit { depth: MAX_DEPTH }.into());
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Writes program output and tracks whether it ended with a newline.
    pub(crate) fn write_output(&mut self, text: &str) -> EvalResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.output.write_all(text.as_bytes())?;
        *self.ended_with_newline = text.ends_with('\n');
        Ok(())
    }

    fn eval_identifier(&self, name: &str) -> EvalResult<Value> {
        self.env
            .resolve(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() }.into())
    }
}
