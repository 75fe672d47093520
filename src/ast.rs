/// Index-addressed storage for expression nodes.
///
/// Every node produced by the parser lives in an [`arena::Arena`] and is
/// referred to by an [`arena::ExprId`]. The arena is released in bulk; nodes
/// are never freed individually.
pub mod arena;

use std::fmt;

pub use arena::{Arena, ExprId};

/// Highest precedence ceiling accepted by the parser.
///
/// A full expression (statement, parenthesized group, call argument, vector
/// element) is parsed with this ceiling so every operator is admitted.
pub const MAX_PRECEDENCE: u8 = 15;

/// An expression node.
///
/// Nodes form a tree inside one [`Arena`]: a node's children are referenced
/// by handle and every handle has exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal. Only produced for the operand of the `.` index
    /// operator, which is lexed in integer-only mode.
    Integer(i64),
    /// A real literal. Every other numeric literal becomes one of these.
    Real(f64),
    /// A name, resolved against the environment at evaluation time.
    Identifier(String),
    /// A vector literal. Elements stay unevaluated until inspected.
    Vector(Vec<ExprId>),
    /// A prefix operation or an absolute-value block.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The single operand.
        operand: ExprId,
    },
    /// An infix operation or a function call.
    ///
    /// For [`BinaryOperator::Call`], `left` is an [`Expr::Identifier`] naming
    /// the callee and `right` is an [`Expr::Vector`] of argument expressions.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  ExprId,
        /// Right operand.
        right: ExprId,
    },
}

/// Operators taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`
    Identity,
    /// `-x`
    Negate,
    /// `!x`
    Not,
    /// `~x`
    BitNot,
    /// `|x|`
    Abs,
}

impl UnaryOperator {
    /// Precedence at which a prefix operator parses its operand.
    ///
    /// ## Example
    /// ```
    /// use calx::ast::{BinaryOperator, UnaryOperator};
    ///
    /// assert!(UnaryOperator::Negate.precedence() < BinaryOperator::Pow.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Identity | Self::Negate | Self::Not | Self::BitNot => 2,
            Self::Abs => MAX_PRECEDENCE,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "Identity",
            Self::Negate => "Negate",
            Self::Not => "Not",
            Self::BitNot => "BitNot",
            Self::Abs => "Abs",
        };
        write!(f, "{name}")
    }
}

/// Operators taking two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `f(args)`, never produced by the infix loop.
    Call,
    /// `v.n`, zero-based vector indexing.
    Index,
    /// `a @ b`, dot product of two vectors.
    Dot,
    /// `a ^ b`
    Pow,
    /// `a root b`, the `b`-th root of `a`.
    Root,
    /// `a * b`, also synthesized for implicit multiplication.
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Mod,
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a < b`
    Less,
    /// `a > b`
    Greater,
    /// `a <= b`
    LessEqual,
    /// `a >= b`
    GreaterEqual,
    /// `a == b`, compares coerced numeric values.
    Equal,
    /// `a != b`
    NotEqual,
    /// `a === b`, also requires identical variants.
    ExactEqual,
    /// `a !== b`
    ExactNotEqual,
    /// `a = b`, fails evaluation unless both sides are loosely equal.
    AssertEqual,
}

impl BinaryOperator {
    /// Returns the operator's precedence. Lower values bind tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Call => 0,
            Self::Index | Self::Dot => 1,
            Self::Pow | Self::Root => 3,
            Self::Mul | Self::Div | Self::Mod => 4,
            Self::Add | Self::Sub => 5,
            Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual => 6,
            Self::Equal | Self::NotEqual | Self::ExactEqual | Self::ExactNotEqual => 7,
            Self::AssertEqual => 8,
        }
    }

    /// Returns `true` for operators whose right operand is parsed at their
    /// own precedence.
    ///
    /// ## Example
    /// ```
    /// use calx::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.is_right_associative());
    /// assert!(!BinaryOperator::Sub.is_right_associative());
    /// ```
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Returns `true` for `<`, `>`, `<=` and `>=`.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self,
                 Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual)
    }

    /// Returns `true` for the arithmetic operators handled by numeric
    /// coercion.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self,
                 Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Pow | Self::Root)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Call => "()",
            Self::Index => ".",
            Self::Dot => "@",
            Self::Pow => "^",
            Self::Root => "root",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::ExactEqual => "===",
            Self::ExactNotEqual => "!==",
            Self::AssertEqual => "=",
        };
        write!(f, "{symbol}")
    }
}
