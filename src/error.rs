/// Lexing errors.
///
/// The lexer never aborts: every unrecognized character is recorded as one of
/// these and skipped.
pub mod lex_error;
/// Parsing errors.
///
/// Defines every error that can abort the parse of a single statement, such
/// as a missing operand, a malformed vector literal or an unclosed block.
/// Each error carries the byte offset where it was detected.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. A runtime
/// error fails the statement that raised it and never the host.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error a statement can fail with.
pub enum Error {
    /// The statement could not be parsed.
    Parse(ParseError),
    /// The statement was parsed but failed during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
