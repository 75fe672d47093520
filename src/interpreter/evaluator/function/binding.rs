use std::rc::Rc;

use crate::{
    ast::{Expr, ExprId},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::core::is_builtin,
        },
        value::core::{FunctionObject, Value},
    },
};

/// `let(name, value)`: binds `name` in the current frame.
///
/// # Errors
/// - `InvalidArgument` if the first argument is not a plain name.
/// - `BuiltinRedefinition` if the name belongs to a built-in function.
pub fn let_binding(evaluator: &mut Evaluator<'_>, args: &[ExprId]) -> EvalResult<Value> {
    let name = parameter_name(evaluator, args[0])?;
    if is_builtin(name) {
        return Err(RuntimeError::BuiltinRedefinition { name: name.to_string() }.into());
    }

    let value = evaluator.eval(args[1])?;
    log::debug!("binding '{name}' to a {}", value.type_name());
    evaluator.env.define(name, value);

    Ok(Value::Nothing)
}

/// `func(p1, ..., pn, body)`: builds a function value.
///
/// The body is kept unevaluated.
///
/// # Errors
/// `InvalidArgument` if a parameter is not a plain name.
pub fn func(evaluator: &mut Evaluator<'_>, args: &[ExprId]) -> EvalResult<Value> {
    let Some((&body, params)) = args.split_last() else {
        return Err(RuntimeError::InvalidArgument { details: "func needs a body".to_string() }.into());
    };

    let evaluator: &Evaluator<'_> = evaluator;
    let params = params.iter()
                       .map(|&param| parameter_name(evaluator, param).map(str::to_string))
                       .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::Function(Rc::new(FunctionObject { params, body })))
}

fn parameter_name<'a>(evaluator: &Evaluator<'a>, id: ExprId) -> Result<&'a str, RuntimeError> {
    match evaluator.node(id)? {
        Expr::Identifier(name) => Ok(name),
        _ => Err(RuntimeError::InvalidArgument { details: "expected a name".to_string() }),
    }
}
