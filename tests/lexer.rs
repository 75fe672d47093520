use calx::{
    error::LexError,
    interpreter::lexer::{Cursor, Token},
};

fn tokens(src: &str) -> Vec<Token> {
    Cursor::new(src).map(|lexeme| lexeme.token).collect()
}

fn number(literal: &str) -> Token {
    Token::Number(literal.to_string())
}

#[test]
fn digit_separators_are_dropped() {
    assert_eq!(tokens("1_000"), tokens("1000"));
    assert_eq!(tokens("1_000_000.5"), vec![number("1000000.5")]);
}

#[test]
fn underscore_without_digit_ends_number() {
    let mut cursor = Cursor::new("1_x");
    let first = cursor.next().unwrap();
    assert_eq!(first.token, number("1"));
    assert_eq!(first.text, "1");

    let second = cursor.next().unwrap();
    assert_eq!(second.token, Token::Identifier);
    assert_eq!(second.text, "_x");

    assert_eq!(tokens("1__0"), vec![number("1"), Token::Identifier]);
}

#[test]
fn number_consumes_one_dot() {
    assert_eq!(tokens("3.14.15"), vec![number("3.14"), Token::Dot, number("15")]);
}

#[test]
fn exponent_needs_a_digit() {
    assert_eq!(tokens("1e5"), vec![number("1e5")]);
    assert_eq!(tokens("1.5E-3"), vec![number("1.5E-3")]);
    assert_eq!(tokens("2e+1_0"), vec![number("2e+10")]);
    assert_eq!(tokens("2e"), vec![number("2"), Token::Identifier]);
    assert_eq!(tokens("2e+x"), vec![number("2"), Token::Identifier, Token::Plus, Token::Identifier]);
    assert_eq!(tokens("3exp"), vec![number("3"), Token::Identifier]);
}

#[test]
fn integer_mode_skips_exponents() {
    let mut cursor = Cursor::new("1e5");
    cursor.expect_integer();
    assert_eq!(cursor.next().unwrap().token, number("1"));
    assert_eq!(cursor.next().unwrap().token, Token::Identifier);
}

#[test]
fn integer_mode_lasts_one_token() {
    let mut cursor = Cursor::new("v.1.5");
    assert_eq!(cursor.next().unwrap().token, Token::Identifier);
    assert_eq!(cursor.next().unwrap().token, Token::Dot);

    cursor.expect_integer();
    assert_eq!(cursor.next().unwrap().token, number("1"));
    assert_eq!(cursor.next().unwrap().token, Token::Dot);
    assert_eq!(cursor.next().unwrap().token, number("5"));
    assert!(cursor.next().is_none());

    let mut cursor = Cursor::new("2.5 2.5");
    cursor.expect_integer();
    assert_eq!(cursor.next().unwrap().token, number("2"));
    assert_eq!(cursor.next().unwrap().token, Token::Dot);
    assert_eq!(cursor.next().unwrap().token, number("5"));
    assert_eq!(cursor.next().unwrap().token, number("2.5"));
}

#[test]
fn peek_is_idempotent() {
    let mut cursor = Cursor::new("a + b");
    let first = cursor.peek().cloned();
    let second = cursor.peek().cloned();
    assert_eq!(first, second);
    assert_eq!(cursor.next(), first);
    assert_eq!(cursor.peek().map(|lexeme| lexeme.token.clone()), Some(Token::Plus));
}

#[test]
fn root_is_a_keyword() {
    assert_eq!(tokens("8 root 3"), vec![number("8"), Token::Root, number("3")]);
    assert_eq!(tokens("rooted"), vec![Token::Identifier]);
}

#[test]
fn comparison_operators_take_longest_match() {
    assert_eq!(tokens("< <= > >= = == === ! != !=="),
               vec![Token::Less,
                    Token::LessEqual,
                    Token::Greater,
                    Token::GreaterEqual,
                    Token::Equals,
                    Token::EqualEqual,
                    Token::EqualEqualEqual,
                    Token::Bang,
                    Token::BangEqual,
                    Token::BangEqualEqual]);
}

#[test]
fn offsets_are_byte_positions() {
    let offsets: Vec<usize> = Cursor::new("ab  + 12").map(|lexeme| lexeme.offset).collect();
    assert_eq!(offsets, vec![0, 4, 6]);
}

#[test]
fn unknown_characters_are_skipped() {
    let mut cursor = Cursor::new("a $ b");
    let texts: Vec<&str> = cursor.by_ref().map(|lexeme| lexeme.text).collect();
    assert_eq!(texts, vec!["a", "b"]);
    assert_eq!(cursor.errors(),
               &[LexError::UnrecognizedCharacter { character: '$',
                                                   offset:    2, }]);
}

#[test]
fn multibyte_characters_are_skipped_whole() {
    let mut cursor = Cursor::new("x é y");
    let texts: Vec<&str> = cursor.by_ref().map(|lexeme| lexeme.text).collect();
    assert_eq!(texts, vec!["x", "y"]);
    assert_eq!(cursor.errors().len(), 1);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokens("").is_empty());
    assert!(tokens(" \t\n ").is_empty());
}
