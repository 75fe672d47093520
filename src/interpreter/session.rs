use std::{
    io::{self, Write},
    time::Instant,
};

pub use crate::interpreter::evaluator::core::ControlSignal;
use crate::{
    ast::{Arena, ExprId},
    config::Config,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, Interrupt},
            environment::Environment,
        },
        parser::parse_statements,
        value::core::Value,
    },
};

/// Name bound to the most recent non-empty result.
pub const ANSWER: &str = "ans";

/// What happened to one statement of a batch.
#[derive(Debug)]
pub enum Outcome {
    /// The statement evaluated to a value.
    Value(Value),
    /// The statement asked the host to do something.
    Control(ControlSignal),
    /// The statement failed to parse or to evaluate.
    Error(Error),
}

impl Outcome {
    /// The last value other than `Nothing` in a batch, ignoring any
    /// statements that failed or signalled after it.
    #[must_use]
    pub fn last_value(outcomes: &[Self]) -> Option<&Value> {
        outcomes.iter().rev().find_map(|outcome| match outcome {
                                 Self::Value(Value::Nothing) => None,
                                 Self::Value(value) => Some(value),
                                 Self::Control(_) | Self::Error(_) => None,
                             })
    }
}

/// Everything needed to run programs: the expression arena, the bindings,
/// the printing configuration and the output sink.
///
/// Bindings persist across batches. The arena keeps growing until
/// [`Session::release`] is called; function and vector values refer to
/// nodes in it, so releasing makes them unusable.
/// [`Session::release_if_unreferenced`] only releases while no binding
/// holds such a value.
///
/// ## Example
/// ```
/// use calx::{
///     config::Config,
///     interpreter::{session::{Outcome, Session}, value::core::Value},
/// };
///
/// let mut session = Session::with_output(Config::default(), Vec::new());
/// session.run("let(x, 4)");
///
/// let outcomes = session.run("println(x); x^2");
/// assert!(matches!(outcomes.last(), Some(Outcome::Value(Value::Real(16.0)))));
/// assert_eq!(session.output(), b"4\n");
/// ```
pub struct Session<W: Write> {
    arena:              Arena,
    env:                Environment,
    config:             Config,
    output:             W,
    ended_with_newline: bool,
}

impl Session<io::Stdout> {
    /// Creates a session writing program output to stdout.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Session<W> {
    /// Creates a session writing program output to `output`.
    pub fn with_output(config: Config, output: W) -> Self {
        Self { arena: Arena::new(),
               env: Environment::new(),
               config,
               output,
               ended_with_newline: true }
    }

    /// Parses `source` into the session's arena without evaluating it.
    pub fn parse(&mut self, source: &str) -> Vec<Result<ExprId, ParseError>> {
        let started = Instant::now();
        let statements = parse_statements(source, &mut self.arena);
        if self.config.timing {
            log::debug!("parsed {} statement(s) in {:?}", statements.len(), started.elapsed());
        }
        statements
    }

    /// Evaluates a parsed statement.
    ///
    /// # Errors
    /// The [`Interrupt`] that ended evaluation.
    pub fn eval(&mut self, id: ExprId) -> EvalResult<Value> {
        let started = Instant::now();
        let result = self.evaluator().eval(id);
        if self.config.timing {
            log::debug!("evaluated in {:?}", started.elapsed());
        }
        result
    }

    /// Parses and evaluates every statement in `source`.
    ///
    /// Statements run in order and a failing statement does not stop the
    /// ones after it. A `quit()` ends the batch immediately. The last value
    /// other than `Nothing` is bound to `ans`.
    pub fn run(&mut self, source: &str) -> Vec<Outcome> {
        self.run_with(source, |_| {})
    }

    /// Like [`Session::run`], but hands every outcome to `on_outcome` as
    /// soon as its statement finishes, before the next one starts.
    ///
    /// ## Example
    /// ```
    /// use calx::{
    ///     config::Config,
    ///     interpreter::session::{ControlSignal, Outcome, Session},
    /// };
    ///
    /// let mut session = Session::with_output(Config::default(), Vec::new());
    /// let mut seen = 0;
    /// let mut cleared_at = None;
    /// let outcomes = session.run_with("print(1); clear(); print(2)", |outcome| {
    ///                           seen += 1;
    ///                           if matches!(outcome, Outcome::Control(ControlSignal::ClearScreen)) {
    ///                               cleared_at = Some(seen);
    ///                           }
    ///                       });
    /// assert_eq!(cleared_at, Some(2));
    /// assert_eq!(outcomes.len(), 3);
    /// assert_eq!(session.output(), b"12");
    /// ```
    pub fn run_with(&mut self, source: &str, mut on_outcome: impl FnMut(&Outcome)) -> Vec<Outcome> {
        let statements = self.parse(source);
        let mut outcomes = Vec::with_capacity(statements.len());

        for statement in statements {
            let id = match statement {
                Ok(id) => id,
                Err(error) => {
                    let outcome = Outcome::Error(error.into());
                    on_outcome(&outcome);
                    outcomes.push(outcome);
                    continue;
                },
            };

            let outcome = match self.eval(id) {
                Ok(value) => {
                    if value != Value::Nothing {
                        self.env.define(ANSWER, value.clone());
                    }
                    Outcome::Value(value)
                },
                Err(Interrupt::Control(signal)) => Outcome::Control(signal),
                Err(Interrupt::Error(error)) => {
                    log::error!("{error}");
                    Outcome::Error(error.into())
                },
            };
            on_outcome(&outcome);

            let quit = matches!(outcome, Outcome::Control(ControlSignal::Quit));
            outcomes.push(outcome);
            if quit {
                break;
            }
        }

        outcomes
    }

    /// Renders a value with the session's configuration.
    ///
    /// # Errors
    /// Any error raised while evaluating vector elements.
    pub fn render(&mut self, value: &Value) -> Result<String, RuntimeError> {
        match self.evaluator().render(value) {
            Ok(text) => Ok(text),
            Err(Interrupt::Error(error)) => Err(error),
            Err(Interrupt::Control(signal)) => {
                Err(RuntimeError::InvalidArgument { details: format!("{signal:?} while printing") })
            },
        }
    }

    /// Writes a value followed by a newline to the session output.
    ///
    /// `Nothing` prints nothing.
    ///
    /// # Errors
    /// Rendering errors and failed writes.
    pub fn print_value(&mut self, value: &Value) -> Result<(), RuntimeError> {
        if *value == Value::Nothing {
            return Ok(());
        }
        let mut text = self.render(value)?;
        text.push('\n');
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        self.ended_with_newline = true;
        Ok(())
    }

    /// Drops every parsed expression at once.
    ///
    /// Function and vector values created before the release report
    /// `ReleasedExpression` when used.
    pub fn release(&mut self) {
        self.arena.release();
    }

    /// Releases the arena unless a binding still holds a vector or a
    /// function. Values kept by the host from earlier batches are not
    /// tracked.
    ///
    /// # Returns
    /// Whether the arena was released.
    pub fn release_if_unreferenced(&mut self) -> bool {
        if self.env.holds_expressions() {
            return false;
        }
        self.release();
        true
    }

    /// Whether the last program output ended with a newline.
    #[must_use]
    pub const fn ended_with_newline(&self) -> bool {
        self.ended_with_newline
    }

    /// Marks the output as ending with a newline, e.g. after the host wrote
    /// one itself.
    pub const fn reset_newline(&mut self) {
        self.ended_with_newline = true;
    }

    /// The printing configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the printing configuration.
    pub const fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// The expression arena.
    #[must_use]
    pub const fn arena(&self) -> &Arena {
        &self.arena
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn evaluator(&mut self) -> Evaluator<'_> {
        Evaluator::new(&self.arena,
                       &mut self.env,
                       &self.config,
                       &mut self.output,
                       &mut self.ended_with_newline)
    }
}
