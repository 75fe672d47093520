use crate::{
    ast::ExprId,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        printer::render_tree,
        value::core::Value,
    },
};

/// Prints its arguments separated by spaces, without a trailing newline.
pub fn print(evaluator: &mut Evaluator<'_>, args: &[ExprId]) -> EvalResult<Value> {
    let mut rendered = Vec::with_capacity(args.len());
    for &arg in args {
        let value = evaluator.eval(arg)?;
        rendered.push(evaluator.render(&value)?);
    }

    evaluator.write_output(&rendered.join(" "))?;
    Ok(Value::Nothing)
}

/// Prints each argument on its own line. Without arguments, prints an empty
/// line.
pub fn println(evaluator: &mut Evaluator<'_>, args: &[ExprId]) -> EvalResult<Value> {
    if args.is_empty() {
        evaluator.write_output("\n")?;
    }
    for &arg in args {
        let value = evaluator.eval(arg)?;
        let line = evaluator.render(&value)?;
        evaluator.write_output(&format!("{line}\n"))?;
    }

    Ok(Value::Nothing)
}

/// Prints the expression tree of its argument without evaluating it.
pub fn ast(evaluator: &mut Evaluator<'_>, args: &[ExprId]) -> EvalResult<Value> {
    let tree = render_tree(evaluator.arena, evaluator.config, args[0])?;
    evaluator.write_output(&format!("{tree}\n"))?;

    Ok(Value::Nothing)
}
