//! # calx
//!
//! calx is an embeddable interpreter for a small mathematical expression
//! language. It parses and evaluates expressions over integers, reals,
//! complex numbers, booleans and lazily evaluated vectors, with implicit
//! multiplication, absolute-value blocks and user-defined functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::{
    config::Config,
    error::Error,
    interpreter::{
        session::{ControlSignal, Outcome, Session},
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, the operator enums and the arena
/// that owns every node of a parse session.
///
/// # Responsibilities
/// - Defines the expression tree for all language constructs.
/// - Assigns operator precedence and associativity.
/// - Stores nodes by handle and releases them in bulk.
pub mod ast;
/// Printing and diagnostics settings passed explicitly to every stage.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Parse errors carry the byte offset where they were detected. Runtime
/// errors fail a single statement and never the host.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and printing and
/// exposes [`interpreter::session::Session`] as the entry point for hosts.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize` and `f64` without silent data
///   loss.
/// - Check vector indices.
pub mod util;

/// Runs a script and returns the rendering of its last value.
///
/// Each non-blank line runs as its own batch in one shared session, so
/// bindings carry over from line to line. Program output such as `println`
/// is discarded. Execution stops at the first failing statement or at
/// `quit()`.
///
/// # Errors
/// The first parse or runtime error.
///
/// # Examples
/// ```
/// use calx::{config::Config, run_script};
///
/// let script = "let(f, func(x, x^2 + 1))\nf(3) = 10\nf(2) * 2";
/// assert_eq!(run_script(script, &Config::default()).unwrap(), Some("10".to_string()));
/// ```
pub fn run_script(source: &str, config: &Config) -> Result<Option<String>, Error> {
    let mut session = Session::with_output(config.clone(), io::sink());
    let mut last = None;

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        for outcome in session.run(line) {
            match outcome {
                Outcome::Value(Value::Nothing) => {},
                Outcome::Value(value) => last = Some(value),
                Outcome::Control(ControlSignal::ClearScreen) => {},
                Outcome::Control(ControlSignal::Quit) => return render_last(&mut session, last),
                Outcome::Error(error) => return Err(error),
            }
        }
    }

    render_last(&mut session, last)
}

fn render_last<W: io::Write>(session: &mut Session<W>, last: Option<Value>) -> Result<Option<String>, Error> {
    last.map(|value| session.render(&value)).transpose().map_err(Error::from)
}
