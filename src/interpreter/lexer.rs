use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `1_000_000` or
    /// `1.5e-3`.
    ///
    /// Carries the literal with its digit-group separators removed. A `_`
    /// only belongs to the literal when a digit follows it, and at most one
    /// `.` is consumed. An `e` or `E` starts an exponent only when a digit
    /// follows it, optionally after a sign, so `2e` is still `2` times `e`.
    /// While [`LexerExtras::integer_only`] is set neither a `.` nor an
    /// exponent is consumed.
    #[regex(r"[0-9]", lex_number)]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `root`
    #[token("root")]
    Root,
    /// `.`
    #[token(".")]
    Dot,
    /// `@`
    #[token("@")]
    At,
    /// `^`
    #[token("^")]
    Caret,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `|`
    #[token("|")]
    Pipe,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `===`
    #[token("===")]
    EqualEqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!==`
    #[token("!==")]
    BangEqualEqual,
}

/// Additional state carried by the lexer during tokenization.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// When set, the next number is lexed as a plain digit run that never
    /// consumes a `.`. Cleared after every token.
    pub integer_only: bool,
}

/// Extends a number token that started with a single digit.
///
/// Consumes digits, `_` separators that are directly followed by a digit,
/// a single `.` and an exponent, unless integer-only mode is active.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer positioned after the first digit.
///
/// # Returns
/// The literal with all separators removed.
fn lex_number(lex: &mut logos::Lexer<Token>) -> String {
    let rest = lex.remainder().as_bytes();
    let mut consumed = digit_run(rest, 0);

    if !lex.extras.integer_only {
        if rest.get(consumed) == Some(&b'.') {
            consumed = digit_run(rest, consumed + 1);
        }
        consumed += exponent_len(&rest[consumed..]);
    }

    lex.bump(consumed);
    lex.slice().chars().filter(|&c| c != '_').collect()
}

/// Index just past the digits and separators starting at `start`.
fn digit_run(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    loop {
        match bytes.get(end) {
            Some(byte) if byte.is_ascii_digit() => end += 1,
            Some(b'_') if bytes.get(end + 1).is_some_and(u8::is_ascii_digit) => end += 1,
            _ => return end,
        }
    }
}

/// Length of an `e[+-]digits` suffix at the start of `bytes`, or zero.
fn exponent_len(bytes: &[u8]) -> usize {
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    if !bytes.get(1 + sign).is_some_and(u8::is_ascii_digit) {
        return 0;
    }
    digit_run(bytes, 1 + sign)
}

/// A token together with the source text it was lexed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'src> {
    /// The token kind.
    pub token:  Token,
    /// The exact source slice, separators included.
    pub text:   &'src str,
    /// Byte offset of the first character in the source.
    pub offset: usize,
}

/// Pull-based token stream with one token of lookahead.
///
/// Tokens are lexed on demand. [`Cursor::peek`] caches the next token and
/// repeated peeks return the cached one; iterating drains the cache first.
/// Unrecognized characters are logged, recorded and skipped one at a time.
///
/// ## Example
/// ```
/// use calx::interpreter::lexer::{Cursor, Token};
///
/// let mut cursor = Cursor::new("[1,2].1.5");
/// let tokens: Vec<Token> = cursor.by_ref().take(6).map(|lexeme| lexeme.token).collect();
/// assert_eq!(tokens[5], Token::Dot);
///
/// cursor.expect_integer();
/// assert_eq!(cursor.next().map(|lexeme| lexeme.token), Some(Token::Number("1".into())));
/// ```
pub struct Cursor<'src> {
    source: &'src str,
    lexer:  logos::Lexer<'src, Token>,
    peeked: Option<Option<Lexeme<'src>>>,
    errors: Vec<LexError>,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               lexer: Token::lexer(source),
               peeked: None,
               errors: Vec::new() }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Lexeme<'src>> {
        if self.peeked.is_none() {
            let lexeme = self.lex();
            self.peeked = Some(lexeme);
        }
        self.peeked.as_ref().and_then(Option::as_ref)
    }

    /// Switches the lexer to integer-only mode for exactly the next token
    /// lexed.
    ///
    /// Has no effect on a token that is already cached by [`Cursor::peek`].
    pub fn expect_integer(&mut self) {
        self.lexer.extras.integer_only = true;
    }

    /// Characters skipped so far.
    #[must_use]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Byte offset just past the last token lexed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.lexer.span().end
    }

    /// Byte offset one past the end of the source.
    #[must_use]
    pub const fn end_offset(&self) -> usize {
        self.source.len()
    }

    fn lex(&mut self) -> Option<Lexeme<'src>> {
        loop {
            let result = self.lexer.next();
            self.lexer.extras.integer_only = false;

            match result? {
                Ok(token) => {
                    return Some(Lexeme { token,
                                         text: self.lexer.slice(),
                                         offset: self.lexer.span().start });
                },
                Err(()) => self.skip_unrecognized(),
            }
        }
    }

    fn skip_unrecognized(&mut self) {
        let span = self.lexer.span();
        let Some(character) = self.source[span.start..].chars().next() else {
            return;
        };
        log::warn!("skipping unrecognized character '{}' at offset {}",
                   character.escape_debug(),
                   span.start);
        self.errors.push(LexError::UnrecognizedCharacter { character,
                                                           offset: span.start });

        let char_end = span.start + character.len_utf8();
        if span.end < char_end {
            self.lexer.bump(char_end - span.end);
        }
    }
}

impl<'src> Iterator for Cursor<'src> {
    type Item = Lexeme<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(lexeme) => lexeme,
            None => self.lex(),
        }
    }
}
