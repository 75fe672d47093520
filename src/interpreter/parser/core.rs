use std::collections::HashMap;

use crate::{
    ast::{Arena, Expr, ExprId, MAX_PRECEDENCE},
    error::{LexError, ParseError},
    interpreter::lexer::{Cursor, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting accepted in one statement, counting both open
/// sub-expressions while parsing and the height of the finished tree.
pub const MAX_NESTING: usize = 256;

/// Precedence-climbing parser over a single source string.
///
/// The parser pulls tokens from a [`Cursor`] and stores every node it builds
/// in the borrowed [`Arena`].
///
/// ## Example
/// ```
/// use calx::{
///     ast::{Arena, BinaryOperator, Expr},
///     interpreter::parser::Parser,
/// };
///
/// let mut arena = Arena::new();
/// let statements = Parser::new("1 + 2; 3", &mut arena).parse_statements();
/// assert_eq!(statements.len(), 2);
///
/// let first = *statements[0].as_ref().unwrap();
/// assert!(matches!(arena.get(first), Some(Expr::BinaryOp { op: BinaryOperator::Add, .. })));
/// ```
pub struct Parser<'src, 'a> {
    pub(super) cursor:          Cursor<'src>,
    pub(super) arena:           &'a mut Arena,
    pub(super) in_pipe_block:   bool,
    pub(super) integer_literal: bool,
    pub(super) depth:           usize,
    heights:                    HashMap<ExprId, usize>,
}

impl<'src, 'a> Parser<'src, 'a> {
    /// Creates a parser positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str, arena: &'a mut Arena) -> Self {
        Self { cursor: Cursor::new(source),
               arena,
               in_pipe_block: false,
               integer_literal: false,
               depth: 0,
               heights: HashMap::new() }
    }

    /// Parses `;`-separated statements until the input is exhausted.
    ///
    /// Empty statements are skipped. A statement that fails to parse yields
    /// an `Err` entry and parsing resumes after the next `;`.
    ///
    /// # Returns
    /// One entry per non-empty statement, in source order.
    pub fn parse_statements(&mut self) -> Vec<ParseResult<ExprId>> {
        let mut statements = Vec::new();

        while let Some(lexeme) = self.cursor.peek() {
            if lexeme.token == Token::Semicolon {
                self.cursor.next();
                continue;
            }

            let statement = self.parse_statement();
            if let Err(error) = &statement {
                log::error!("{error}");
                self.synchronize();
            }
            statements.push(statement);
        }

        statements
    }

    /// Parses the whole input as a single expression.
    ///
    /// # Errors
    /// Fails on any parse error, or with
    /// [`ParseError::UnexpectedTrailingToken`] if input remains after the
    /// expression.
    pub fn parse_expression(&mut self) -> ParseResult<ExprId> {
        self.reset_state();
        let expr = self.parse_expr(MAX_PRECEDENCE)?;

        match self.cursor.next() {
            None => Ok(expr),
            Some(lexeme) => Err(ParseError::UnexpectedTrailingToken { token:  lexeme.text.to_string(),
                                                                      offset: lexeme.offset, }),
        }
    }

    /// Characters the lexer skipped so far.
    #[must_use]
    pub fn lex_errors(&self) -> &[LexError] {
        self.cursor.errors()
    }

    fn parse_statement(&mut self) -> ParseResult<ExprId> {
        self.reset_state();
        let expr = self.parse_expr(MAX_PRECEDENCE)?;

        match self.cursor.next() {
            None => Ok(expr),
            Some(lexeme) if lexeme.token == Token::Semicolon => Ok(expr),
            Some(lexeme) => Err(ParseError::UnexpectedTrailingToken { token:  lexeme.text.to_string(),
                                                                      offset: lexeme.offset, }),
        }
    }

    /// Skips tokens up to and including the next `;`.
    fn synchronize(&mut self) {
        for lexeme in self.cursor.by_ref() {
            if lexeme.token == Token::Semicolon {
                break;
            }
        }
    }

    fn reset_state(&mut self) {
        self.in_pipe_block = false;
        self.integer_literal = false;
        self.depth = 0;
        self.heights.clear();
    }

    /// Stores a node, refusing trees taller than [`MAX_NESTING`].
    pub(super) fn alloc(&mut self, expr: Expr) -> ParseResult<ExprId> {
        let height = self.height_of(&expr);
        if height > MAX_NESTING {
            return Err(self.nesting_too_deep());
        }

        let id = self.arena.alloc(expr);
        self.heights.insert(id, height);
        Ok(id)
    }

    fn height_of(&self, expr: &Expr) -> usize {
        let child = |id: &ExprId| self.heights.get(id).copied().unwrap_or(0);
        let tallest = match expr {
            Expr::Integer(_) | Expr::Real(_) | Expr::Identifier(_) => 0,
            Expr::Vector(elements) => elements.iter().map(child).max().unwrap_or(0),
            Expr::UnaryOp { operand, .. } => child(operand),
            Expr::BinaryOp { left, right, .. } => child(left).max(child(right)),
        };
        tallest + 1
    }

    pub(super) fn nesting_too_deep(&self) -> ParseError {
        ParseError::NestingTooDeep { limit:  MAX_NESTING,
                                     offset: self.cursor.position(), }
    }

    pub(super) const fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { offset: self.cursor.end_offset() }
    }

    /// Consumes the token closing a group.
    ///
    /// A wrong closing token is consumed together with the token after it,
    /// and a warning is logged. A group left open at the end of input is
    /// accepted with a warning.
    pub(super) fn close_group(&mut self, closing: &Token, name: &str) {
        match self.cursor.next() {
            Some(lexeme) if lexeme.token == *closing => {},
            Some(lexeme) => {
                log::warn!("expected end of {name} at offset {}, found '{}'",
                           lexeme.offset,
                           lexeme.text);
                self.cursor.next();
            },
            None => log::warn!("{name} left open at end of input"),
        }
    }
}

/// Parses `;`-separated statements from `source` into `arena`.
///
/// See [`Parser::parse_statements`].
pub fn parse_statements(source: &str, arena: &mut Arena) -> Vec<ParseResult<ExprId>> {
    Parser::new(source, arena).parse_statements()
}

/// Parses `source` as one expression into `arena`.
///
/// # Errors
/// See [`Parser::parse_expression`].
pub fn parse_expression(source: &str, arena: &mut Arena) -> ParseResult<ExprId> {
    Parser::new(source, arena).parse_expression()
}
