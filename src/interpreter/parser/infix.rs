use std::mem;

use crate::{
    ast::{BinaryOperator, Expr, ExprId},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{MAX_NESTING, ParseResult, Parser},
            utils::{token_to_binary_operator, token_to_unary_operator},
        },
    },
};

impl Parser<'_, '_> {
    /// Parses an expression whose operators all have a precedence of at most
    /// `ceiling`.
    ///
    /// Grammar: `expr := unary | primary (infix_step)*`, where a prefix
    /// operator parses its operand at its own precedence and the infix loop
    /// then continues on the result.
    ///
    /// For each infix step the right operand is parsed with the operator's
    /// own precedence as the ceiling when it is right-associative, and with
    /// one less otherwise.
    ///
    /// # Parameters
    /// - `ceiling`: Highest precedence admitted at this level.
    ///
    /// # Returns
    /// The handle of the parsed expression.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if no expression starts here.
    /// - `MissingOperand` if an infix operator has no right operand.
    /// - `NestingTooDeep` once [`MAX_NESTING`] levels are open.
    /// - Any error raised by a primary expression.
    pub(super) fn parse_expr(&mut self, ceiling: u8) -> ParseResult<ExprId> {
        if self.depth >= MAX_NESTING {
            return Err(self.nesting_too_deep());
        }

        self.depth += 1;
        let expr = self.parse_operation(ceiling);
        self.depth -= 1;
        expr
    }

    fn parse_operation(&mut self, ceiling: u8) -> ParseResult<ExprId> {
        let integer_literal = mem::take(&mut self.integer_literal);

        let prefix = match self.cursor.peek() {
            Some(lexeme) => token_to_unary_operator(&lexeme.token),
            None => return Err(self.end_of_input()),
        };

        let mut left = if let Some(op) = prefix {
            self.cursor.next();
            let operand = self.parse_expr(op.precedence())?;
            self.alloc(Expr::UnaryOp { op, operand })?
        } else {
            self.parse_primary(integer_literal)?
        };

        while let Some((op, explicit)) = self.peek_infix() {
            let precedence = op.precedence();
            if precedence > ceiling {
                break;
            }

            let operator = if explicit { self.cursor.next() } else { None };
            if op == BinaryOperator::Index {
                self.cursor.expect_integer();
                self.integer_literal = true;
            }

            let right_ceiling = if op.is_right_associative() { precedence } else { precedence - 1 };
            let right = self.parse_expr(right_ceiling)
                            .map_err(|error| missing_operand(error, operator.as_ref()))?;

            left = self.alloc(Expr::BinaryOp { op, left, right })?;
        }

        Ok(left)
    }

    /// Classifies the next token as an infix step.
    ///
    /// # Returns
    /// - `Some((op, true))` for an operator token that must be consumed.
    /// - `Some((BinaryOperator::Mul, false))` when the next token starts an
    ///   operand directly; the multiplication is implicit and nothing is
    ///   consumed.
    /// - `None` when the expression ends here.
    fn peek_infix(&mut self) -> Option<(BinaryOperator, bool)> {
        let in_pipe_block = self.in_pipe_block;
        let token = &self.cursor.peek()?.token;

        match token {
            Token::Identifier | Token::Number(_) | Token::LParen | Token::LBracket => {
                Some((BinaryOperator::Mul, false))
            },
            Token::Pipe if !in_pipe_block => Some((BinaryOperator::Mul, false)),
            _ => token_to_binary_operator(token).map(|op| (op, true)),
        }
    }
}

/// Reports a right operand that never started as a missing operand of the
/// operator that was just consumed.
fn missing_operand(error: ParseError, operator: Option<&Lexeme<'_>>) -> ParseError {
    match (error, operator) {
        (ParseError::UnexpectedEndOfInput { .. } | ParseError::ExpectedExpression { .. }, Some(lexeme)) => {
            ParseError::MissingOperand { operator: lexeme.text.to_string(),
                                         offset:   lexeme.offset, }
        },
        (error, _) => error,
    }
}
