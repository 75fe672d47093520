use std::collections::HashMap;

use crate::interpreter::value::{complex::ComplexNumber, core::Value};

/// Binding environment: a stack of frames searched innermost first.
///
/// Frame 0 is the global frame and can never be popped. It starts out with
/// the constants `pi`, `e`, `i`, `true` and `false`.
///
/// ## Example
/// ```
/// use std::collections::HashMap;
///
/// use calx::interpreter::{evaluator::environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Real(1.0));
///
/// env.push_frame(HashMap::from([("x".to_string(), Value::Real(2.0))]));
/// assert_eq!(env.resolve("x"), Some(Value::Real(2.0)));
///
/// env.pop_frame();
/// assert_eq!(env.resolve("x"), Some(Value::Real(1.0)));
/// ```
#[derive(Debug)]
pub struct Environment {
    frames: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the global constants.
    #[must_use]
    pub fn new() -> Self {
        let globals = HashMap::from([("pi".to_string(), Value::Real(std::f64::consts::PI)),
                                     ("e".to_string(), Value::Real(std::f64::consts::E)),
                                     ("i".to_string(), Value::Complex(ComplexNumber::I)),
                                     ("true".to_string(), Value::Boolean(true)),
                                     ("false".to_string(), Value::Boolean(false))]);
        Self { frames: vec![globals] }
    }

    /// Resolves a name, searching from the innermost frame outwards.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .cloned()
    }

    /// Binds `name` in the innermost frame, replacing any earlier binding
    /// there.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), value);
        }
    }

    /// Enters a new innermost frame.
    pub fn push_frame(&mut self, bindings: HashMap<String, Value>) {
        self.frames.push(bindings);
    }

    /// Leaves the innermost frame. The global frame is never removed.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Whether any binding holds a vector or a function, whose expressions
    /// live in the arena.
    #[must_use]
    pub fn holds_expressions(&self) -> bool {
        self.frames
            .iter()
            .flat_map(HashMap::values)
            .any(|value| matches!(value, Value::Vector(_) | Value::Function(_)))
    }

    /// Number of active frames, the global frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
