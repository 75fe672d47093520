use std::{collections::HashMap, fmt};

use crate::{
    ast::{Expr, ExprId},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{binding, control, io, math},
        },
        value::core::{FunctionObject, Value},
    },
};

/// Handler of a built-in that receives its arguments evaluated, left to
/// right.
type EagerFn = fn(&mut Evaluator<'_>, &[Value]) -> EvalResult<Value>;

/// Handler of a built-in that receives its argument expressions and decides
/// itself what to evaluate.
type RawFn = fn(&mut Evaluator<'_>, &[ExprId]) -> EvalResult<Value>;

/// How a built-in receives its arguments.
#[derive(Clone, Copy)]
enum Builtin {
    Eager(EagerFn),
    Raw(RawFn),
}

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin needs `n` or more arguments.
/// - `Any` accepts every argument count, including none.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - the handler, eager or raw.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  Builtin,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all built-in functions. None of them can be rebound.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"    => { arity: Arity::Exact(1), func: Builtin::Eager(math::sqrt) },
    "exp"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::exp) },
    "ln"      => { arity: Arity::Exact(1), func: Builtin::Eager(math::ln) },
    "sin"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::sin) },
    "cos"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::cos) },
    "tan"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::tan) },
    "abs"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::abs) },
    "re"      => { arity: Arity::Exact(1), func: Builtin::Eager(math::re) },
    "im"      => { arity: Arity::Exact(1), func: Builtin::Eager(math::im) },
    "arg"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::arg) },
    "conj"    => { arity: Arity::Exact(1), func: Builtin::Eager(math::conj) },
    "floor"   => { arity: Arity::Exact(1), func: Builtin::Eager(math::floor) },
    "ceil"    => { arity: Arity::Exact(1), func: Builtin::Eager(math::ceil) },
    "round"   => { arity: Arity::Exact(1), func: Builtin::Eager(math::round) },
    "int"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::int) },
    "len"     => { arity: Arity::Exact(1), func: Builtin::Eager(math::len) },
    "print"   => { arity: Arity::Any, func: Builtin::Raw(io::print) },
    "println" => { arity: Arity::Any, func: Builtin::Raw(io::println) },
    "ast"     => { arity: Arity::Exact(1), func: Builtin::Raw(io::ast) },
    "let"     => { arity: Arity::Exact(2), func: Builtin::Raw(binding::let_binding) },
    "func"    => { arity: Arity::AtLeast(1), func: Builtin::Raw(binding::func) },
    "quit"    => { arity: Arity::Exact(0), func: Builtin::Raw(control::quit) },
    "exit"    => { arity: Arity::Exact(0), func: Builtin::Raw(control::quit) },
    "clear"   => { arity: Arity::Exact(0), func: Builtin::Raw(control::clear) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Any => write!(f, "any number of"),
        }
    }
}

/// Returns `true` if `name` is a built-in function.
///
/// ## Example
/// ```
/// use calx::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("sqrt"));
/// assert!(!is_builtin("x"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it verifies arity and executes the builtin.
    /// Otherwise the name must be bound to a function value.
    ///
    /// # Parameters
    /// - `callee`: Handle of the identifier naming the function.
    /// - `arguments`: Handle of the vector of argument expressions.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` for a wrong number of arguments.
    /// - `NotCallable` if the name is bound to something other than a
    ///   function.
    /// - `UnknownFunction` if the name is not bound at all.
    pub(crate) fn eval_call(&mut self, callee: ExprId, arguments: ExprId) -> EvalResult<Value> {
        let Expr::Identifier(name) = self.node(callee)? else {
            return Err(RuntimeError::TypeError { details: "callee is not a name".to_string() }.into());
        };
        let Expr::Vector(arguments) = self.node(arguments)? else {
            return Err(RuntimeError::TypeError { details: "malformed argument list".to_string() }.into());
        };

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name.as_str()) {
            if !builtin.arity.check(arguments.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name:     name.clone(),
                                                                 expected: builtin.arity.to_string(),
                                                                 found:    arguments.len(), }.into());
            }
            return match builtin.func {
                Builtin::Eager(func) => {
                    let values = self.eval_arguments(arguments)?;
                    func(self, &values)
                },
                Builtin::Raw(func) => func(self, arguments),
            };
        }

        match self.env.resolve(name) {
            Some(Value::Function(function)) => self.call_function(name, &function, arguments),
            Some(other) => Err(RuntimeError::NotCallable { name:  name.clone(),
                                                           found: other.type_name(), }.into()),
            None => Err(RuntimeError::UnknownFunction { name: name.clone() }.into()),
        }
    }

    /// Executes a user function.
    ///
    /// Arguments are evaluated in the caller's frames. The body then runs in
    /// a new frame binding the parameters positionally; names that are not
    /// parameters resolve through the frames active at call time.
    fn call_function(&mut self,
                     name: &str,
                     function: &FunctionObject,
                     arguments: &[ExprId])
                     -> EvalResult<Value> {
        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: function.params.len().to_string(),
                                                             found:    arguments.len(), }.into());
        }

        let values = self.eval_arguments(arguments)?;
        let bindings = function.params
                               .iter()
                               .cloned()
                               .zip(values)
                               .collect::<HashMap<_, _>>();

        self.nested(|evaluator| {
                evaluator.env.push_frame(bindings);
                let result = evaluator.eval(function.body);
                evaluator.env.pop_frame();
                result
            })
    }

    fn eval_arguments(&mut self, arguments: &[ExprId]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|&argument| self.eval(argument)).collect()
    }
}
