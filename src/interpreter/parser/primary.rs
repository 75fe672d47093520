use std::mem;

use crate::{
    ast::{BinaryOperator, Expr, ExprId, MAX_PRECEDENCE, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, Parser},
            utils::starts_primary,
        },
    },
};

impl Parser<'_, '_> {
    /// Parses a primary expression.
    ///
    /// Grammar:
    /// `primary := IDENT ['(' args ')'] | '(' expr ')' | '[' args ']' | '|'
    /// expr '|' | NUMBER`
    ///
    /// A token that cannot start a primary is left unconsumed.
    ///
    /// # Parameters
    /// - `integer_literal`: Whether a number here is the operand of `.` and
    ///   becomes an [`Expr::Integer`].
    pub(super) fn parse_primary(&mut self, integer_literal: bool) -> ParseResult<ExprId> {
        match self.cursor.peek() {
            None => return Err(self.end_of_input()),
            Some(lexeme) if !starts_primary(&lexeme.token) => {
                return Err(ParseError::ExpectedExpression { found:  lexeme.text.to_string(),
                                                            offset: lexeme.offset, });
            },
            Some(_) => {},
        }
        let Some(lexeme) = self.cursor.next() else {
            return Err(self.end_of_input());
        };

        match lexeme.token {
            Token::Identifier => self.parse_identifier(lexeme.text),
            Token::LParen => self.parse_group(),
            Token::LBracket => self.parse_vector(),
            Token::Pipe => self.parse_pipe_block(lexeme.offset),
            Token::Number(literal) => self.parse_number(literal, lexeme.offset, integer_literal),
            _ => Err(ParseError::ExpectedExpression { found:  lexeme.text.to_string(),
                                                      offset: lexeme.offset, }),
        }
    }

    /// Parses an identifier, or a call when `(` follows it directly.
    ///
    /// A call becomes `BinaryOp { op: Call, left: Identifier, right: Vector }`
    /// where the vector holds the argument expressions.
    fn parse_identifier(&mut self, name: &str) -> ParseResult<ExprId> {
        let callee = self.alloc(Expr::Identifier(name.to_string()))?;
        if !matches!(self.cursor.peek(), Some(Lexeme { token: Token::LParen, .. })) {
            return Ok(callee);
        }
        self.cursor.next();

        let enclosing = mem::replace(&mut self.in_pipe_block, false);
        let mut arguments = Vec::new();
        loop {
            if matches!(self.cursor.peek(), None | Some(Lexeme { token: Token::RParen, .. })) {
                break;
            }
            arguments.push(self.parse_expr(MAX_PRECEDENCE)?);
            if !matches!(self.cursor.peek(), Some(Lexeme { token: Token::Comma, .. })) {
                break;
            }
            self.cursor.next();
        }
        self.close_group(&Token::RParen, "argument list");
        self.in_pipe_block = enclosing;

        let arguments = self.alloc(Expr::Vector(arguments))?;
        self.alloc(Expr::BinaryOp { op:    BinaryOperator::Call,
                                    left:  callee,
                                    right: arguments, })
    }

    /// Parses `( expr )`. The group itself leaves no node behind.
    fn parse_group(&mut self) -> ParseResult<ExprId> {
        let enclosing = mem::replace(&mut self.in_pipe_block, false);
        let inner = self.parse_expr(MAX_PRECEDENCE)?;
        self.close_group(&Token::RParen, "parenthesized expression");
        self.in_pipe_block = enclosing;

        Ok(inner)
    }

    /// Parses the elements of a vector literal after its `[`.
    ///
    /// A trailing `,` before `]` is accepted.
    ///
    /// # Errors
    /// `MalformedVector` if an element is followed by anything but `,` or
    /// `]`, or if the input ends inside the literal.
    fn parse_vector(&mut self) -> ParseResult<ExprId> {
        let enclosing = mem::replace(&mut self.in_pipe_block, false);
        let mut elements = Vec::new();

        loop {
            match self.cursor.peek() {
                Some(Lexeme { token: Token::RBracket, .. }) => {
                    self.cursor.next();
                    break;
                },
                None => return Err(self.unterminated_vector()),
                Some(_) => {},
            }

            elements.push(self.parse_expr(MAX_PRECEDENCE)?);

            match self.cursor.peek() {
                Some(Lexeme { token: Token::Comma, .. }) => {
                    self.cursor.next();
                },
                Some(Lexeme { token: Token::RBracket, .. }) => {
                    self.cursor.next();
                    break;
                },
                Some(lexeme) => {
                    return Err(ParseError::MalformedVector { found:  lexeme.text.to_string(),
                                                             offset: lexeme.offset, });
                },
                None => return Err(self.unterminated_vector()),
            }
        }
        self.in_pipe_block = enclosing;

        self.alloc(Expr::Vector(elements))
    }

    fn unterminated_vector(&self) -> ParseError {
        ParseError::MalformedVector { found:  "end of input".to_string(),
                                      offset: self.cursor.end_offset(), }
    }

    /// Parses an absolute-value block after its opening `|`.
    ///
    /// Inside the block a `|` closes the block instead of starting an
    /// implicitly multiplied operand.
    ///
    /// # Errors
    /// `EmptyPipeBlock` for `||`.
    fn parse_pipe_block(&mut self, offset: usize) -> ParseResult<ExprId> {
        if matches!(self.cursor.peek(), Some(Lexeme { token: Token::Pipe, .. })) {
            return Err(ParseError::EmptyPipeBlock { offset });
        }

        let enclosing = mem::replace(&mut self.in_pipe_block, true);
        let operand = self.parse_expr(MAX_PRECEDENCE)?;
        self.close_group(&Token::Pipe, "absolute value block");
        self.in_pipe_block = enclosing;

        self.alloc(Expr::UnaryOp { op: UnaryOperator::Abs,
                                   operand })
    }

    /// Converts a number literal into an [`Expr::Integer`] or an
    /// [`Expr::Real`].
    ///
    /// # Errors
    /// `LiteralTooLarge` if the literal does not fit an `i64` (integer
    /// literals) or a finite `f64` (real literals).
    fn parse_number(&mut self,
                    literal: String,
                    offset: usize,
                    integer_literal: bool)
                    -> ParseResult<ExprId> {
        let expr = if integer_literal {
            literal.parse().ok().map(Expr::Integer)
        } else {
            literal.parse::<f64>().ok().filter(|value| value.is_finite()).map(Expr::Real)
        };

        match expr {
            Some(expr) => self.alloc(expr),
            None => Err(ParseError::LiteralTooLarge { literal, offset }),
        }
    }
}
