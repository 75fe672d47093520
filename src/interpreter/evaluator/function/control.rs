use crate::{
    ast::ExprId,
    interpreter::{
        evaluator::core::{ControlSignal, EvalResult, Evaluator, Interrupt},
        value::core::Value,
    },
};

/// `quit()` and `exit()`: asks the host to stop.
pub fn quit(_: &mut Evaluator<'_>, _: &[ExprId]) -> EvalResult<Value> {
    Err(Interrupt::Control(ControlSignal::Quit))
}

/// `clear()`: asks the host to clear the screen.
pub fn clear(_: &mut Evaluator<'_>, _: &[ExprId]) -> EvalResult<Value> {
    Err(Interrupt::Control(ControlSignal::ClearScreen))
}
