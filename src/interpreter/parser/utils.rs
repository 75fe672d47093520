use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::lexer::Token,
};

/// Maps a token to the infix operator it spells, if any.
///
/// # Parameters
/// - `token`: The token following a complete operand.
///
/// # Returns
/// - `Some(BinaryOperator)` for `.`, `@`, `^`, `root`, arithmetic,
///   comparison and assertion tokens.
/// - `None` otherwise.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    let op = match token {
        Token::Dot => BinaryOperator::Index,
        Token::At => BinaryOperator::Dot,
        Token::Caret => BinaryOperator::Pow,
        Token::Root => BinaryOperator::Root,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::Percent => BinaryOperator::Mod,
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Less => BinaryOperator::Less,
        Token::Greater => BinaryOperator::Greater,
        Token::LessEqual => BinaryOperator::LessEqual,
        Token::GreaterEqual => BinaryOperator::GreaterEqual,
        Token::EqualEqual => BinaryOperator::Equal,
        Token::BangEqual => BinaryOperator::NotEqual,
        Token::EqualEqualEqual => BinaryOperator::ExactEqual,
        Token::BangEqualEqual => BinaryOperator::ExactNotEqual,
        Token::Equals => BinaryOperator::AssertEqual,
        _ => return None,
    };
    Some(op)
}

/// Maps a token to the prefix operator it spells, if any.
#[must_use]
pub const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Identity),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Bang => Some(UnaryOperator::Not),
        Token::Tilde => Some(UnaryOperator::BitNot),
        _ => None,
    }
}

/// Returns `true` if the token can begin a primary expression.
///
/// A `|` is included; whether it opens a block or closes one depends on the
/// parser state.
#[must_use]
pub const fn starts_primary(token: &Token) -> bool {
    matches!(token,
             Token::Identifier | Token::Number(_) | Token::LParen | Token::LBracket | Token::Pipe)
}
