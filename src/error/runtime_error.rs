#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an unbound name.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a name that is neither a built-in nor bound.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a bound name whose value is not a function.
    NotCallable {
        /// The name that was called.
        name:  String,
        /// Type of the bound value.
        found: &'static str,
    },
    /// A numeric operand was expected.
    ExpectedNumber {
        /// Type of the value found instead.
        found: &'static str,
    },
    /// A real operand was expected but a complex value with a non-zero
    /// imaginary part was found.
    ComplexNotReal,
    /// An ordering comparison involved a value without an order.
    NotOrderable {
        /// Type of the left operand.
        left:  &'static str,
        /// Type of the right operand.
        right: &'static str,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Integer division or remainder by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// A vector index was outside the vector.
    IndexOutOfBounds {
        /// Length of the indexed vector.
        len:   usize,
        /// The index requested.
        found: i64,
    },
    /// Two vectors of different lengths were combined.
    LengthMismatch {
        /// Length of the left vector.
        left:  usize,
        /// Length of the right vector.
        right: usize,
    },
    /// A function received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The function called.
        name:     String,
        /// Human readable description of the accepted count.
        expected: String,
        /// Number of arguments passed.
        found:    usize,
    },
    /// An `a = b` assertion did not hold.
    AssertionFailed {
        /// Rendering of the left side.
        left:  String,
        /// Rendering of the right side.
        right: String,
    },
    /// Attempted to bind the name of a built-in function.
    BuiltinRedefinition {
        /// The name of the function.
        name: String,
    },
    /// A built-in received an argument it cannot work with.
    InvalidArgument {
        /// Details about the argument.
        details: String,
    },
    /// Function calls or vector evaluations nested too deeply.
    RecursionLimit {
        /// The depth limit that was hit.
        depth: usize,
    },
    /// An expression handle outlived the release of its arena.
    ReleasedExpression,
    /// Writing to the output sink failed.
    Output {
        /// Details reported by the writer.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Runtime error: Unknown variable '{name}'."),
            Self::UnknownFunction { name } => write!(f, "Runtime error: Unknown function '{name}'."),
            Self::NotCallable { name, found } => {
                write!(f, "Runtime error: '{name}' is a {found} and cannot be called.")
            },
            Self::ExpectedNumber { found } => {
                write!(f, "Runtime error: Expected number, found {found}.")
            },
            Self::ComplexNotReal => write!(f,
                                           "Runtime error: Complex value cannot be used where a real number is required."),
            Self::NotOrderable { left, right } => {
                write!(f, "Runtime error: Cannot order {left} against {right}.")
            },
            Self::TypeError { details } => write!(f, "Runtime error: Type error: {details}."),
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::Overflow => write!(f,
                                     "Runtime error: Integer overflow while trying to compute result."),
            Self::IndexOutOfBounds { len, found } => write!(f,
                                                            "Runtime error: Index out of bounds. Vector has {len} elements, but index {found} was requested."),
            Self::LengthMismatch { left, right } => write!(f,
                                                           "Runtime error: Vector lengths differ ({left} and {right})."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Runtime error: '{name}' expects {expected} argument(s), but {found} were given."),
            Self::AssertionFailed { left, right } => {
                write!(f, "Runtime error: Assertion failed: {left} is not equal to {right}.")
            },
            Self::BuiltinRedefinition { name } => write!(f,
                                                         "Runtime error: Cannot redefine built-in function '{name}'."),
            Self::InvalidArgument { details } => {
                write!(f, "Runtime error: Invalid argument: {details}.")
            },
            Self::RecursionLimit { depth } => {
                write!(f, "Runtime error: Maximum nesting depth of {depth} exceeded.")
            },
            Self::ReleasedExpression => write!(f,
                                               "Runtime error: Expression was released and can no longer be evaluated."),
            Self::Output { details } => write!(f, "Runtime error: Failed to write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(error: std::io::Error) -> Self {
        Self::Output { details: error.to_string() }
    }
}
