/// The built-in function table and call dispatch.
///
/// Looks a callee up among the built-ins first and among bound function
/// values second, checks the argument count and runs the call.
pub mod core;

/// Numeric built-ins.
///
/// `sqrt`, `exp`, `ln`, the trigonometric functions, `abs`, the complex
/// part accessors, rounding, `int` and `len`. All of them receive evaluated
/// arguments.
pub mod math;

/// Output built-ins.
///
/// `print`, `println` and `ast` write to the session output and return
/// nothing.
pub mod io;

/// Binding built-ins.
///
/// `let` binds a name in the current frame and `func` builds a function
/// value from parameter names and a body.
pub mod binding;

/// Control built-ins.
///
/// `quit`, `exit` and `clear` interrupt the statement with a control signal
/// for the host.
pub mod control;
