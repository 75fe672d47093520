#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that abort the parse of a statement.
pub enum ParseError {
    /// Reached the end of input where an expression was required.
    UnexpectedEndOfInput {
        /// Byte offset where the input ended.
        offset: usize,
    },
    /// Found a token that cannot start an expression.
    ExpectedExpression {
        /// The token encountered.
        found:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// An infix operator was not followed by its right operand.
    MissingOperand {
        /// The operator missing an operand.
        operator: String,
        /// Byte offset of the operator.
        offset:   usize,
    },
    /// A vector literal had a bad separator or was never closed.
    MalformedVector {
        /// The token found instead of `,` or `]`.
        found:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// An absolute-value block `||` had nothing inside.
    EmptyPipeBlock {
        /// Byte offset of the opening pipe.
        offset: usize,
    },
    /// A complete statement was followed by something other than `;`.
    UnexpectedTrailingToken {
        /// The extra token.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Expressions were nested deeper than the parser accepts.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:  usize,
        /// Byte offset where the limit was reached.
        offset: usize,
    },
    /// A numeric literal could not be represented.
    LiteralTooLarge {
        /// The literal as written, separators removed.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
}

impl ParseError {
    /// Byte offset in the source at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { offset }
            | Self::ExpectedExpression { offset, .. }
            | Self::MissingOperand { offset, .. }
            | Self::MalformedVector { offset, .. }
            | Self::EmptyPipeBlock { offset }
            | Self::UnexpectedTrailingToken { offset, .. }
            | Self::NestingTooDeep { offset, .. }
            | Self::LiteralTooLarge { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of input.")
            },

            Self::ExpectedExpression { found, offset } => {
                write!(f, "Error at offset {offset}: Expected expression, found '{found}'.")
            },

            Self::MissingOperand { operator, offset } => write!(f,
                                                                "Error at offset {offset}: Operator '{operator}' is missing its right operand."),

            Self::MalformedVector { found, offset } => write!(f,
                                                              "Error at offset {offset}: Expected ',' or ']' in vector, found '{found}'."),

            Self::EmptyPipeBlock { offset } => {
                write!(f, "Error at offset {offset}: Empty absolute value block '||'.")
            },

            Self::UnexpectedTrailingToken { token, offset } => write!(f,
                                                                      "Error at offset {offset}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { limit, offset } => {
                write!(f, "Error at offset {offset}: Expression nested deeper than {limit} levels.")
            },

            Self::LiteralTooLarge { literal, offset } => {
                write!(f, "Error at offset {offset}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
