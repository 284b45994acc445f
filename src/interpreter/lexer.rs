use std::{fmt, sync::mpsc, thread};

use logos::Logos;

/// Capacity of the bounded queue used by [`stream_tokens`].
pub const TOKEN_QUEUE_CAPACITY: usize = 10;

/// Represents a lexical token in one input line.
///
/// Only [`Token::Number`] and [`Token::Identifier`] carry their lexeme.
/// [`Token::End`] is never matched by the scanner itself; [`Tokenizer`]
/// appends it exactly once after the last scanned token.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Numeric literal tokens such as `42`, `3.14` or `7.`.
    /// At most one decimal point; a second one ends the token.
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens, a run of letters such as `sqrt`.
    #[regex(r"\p{L}+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `ans`, the last computed result.
    #[token("ans")]
    Ans,
    /// `pi`
    #[token("pi")]
    Pi,
    /// `e`, ranked above the one-letter identifier.
    #[token("e", priority = 3)]
    E,
    /// `clear`
    #[token("clear")]
    Clear,
    /// `exit`
    #[token("exit")]
    Exit,
    /// End of the line.
    End,
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// The payload-free kind of a [`Token`].
///
/// Error messages refer to tokens by kind only, e.g. `unexpected token END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
    Comma,
    Number,
    Identifier,
    Ans,
    Pi,
    E,
    Clear,
    Exit,
    End,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use anscalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Number("1.5".into()).kind(), TokenKind::Number);
    /// assert_eq!(Token::Star.kind(), TokenKind::Mul);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Mul,
            Self::Slash => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Comma => TokenKind::Comma,
            Self::Number(_) => TokenKind::Number,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Ans => TokenKind::Ans,
            Self::Pi => TokenKind::Pi,
            Self::E => TokenKind::E,
            Self::Clear => TokenKind::Clear,
            Self::Exit => TokenKind::Exit,
            // `Ignored` is skipped by the scanner and never reaches the parser.
            Self::End | Self::Ignored => TokenKind::End,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Comma => "COMMA",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Ans => "ANS",
            Self::Pi => "PI",
            Self::E => "E",
            Self::Clear => "CLEAR",
            Self::Exit => "EXIT",
            Self::End => "END",
        };
        write!(f, "{name}")
    }
}

/// Lazy token sequence for a single line.
///
/// Characters the scanner does not recognize are dropped without a trace.
/// After the last scanned token the iterator yields [`Token::End`] once and
/// is then exhausted. Every `Tokenizer` starts from scratch; nothing carries
/// over between lines.
///
/// # Example
/// ```
/// use anscalc::interpreter::lexer::{Token, Tokenizer};
///
/// let tokens: Vec<Token> = Tokenizer::new("1+2*3").collect();
/// assert_eq!(tokens,
///            vec![Token::Number("1".into()),
///                 Token::Plus,
///                 Token::Number("2".into()),
///                 Token::Star,
///                 Token::Number("3".into()),
///                 Token::End]);
/// ```
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, Token>,
    ended: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `line`.
    #[must_use]
    pub fn new(line: &'src str) -> Self {
        Self { lexer: Token::lexer(line),
               ended: false, }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.ended {
            return None;
        }
        for token in self.lexer.by_ref() {
            if let Ok(token) = token {
                return Some(token);
            }
        }
        self.ended = true;
        Some(Token::End)
    }
}

/// Tokenizes `line` on a producer thread, delivering tokens through a bounded
/// channel of [`TOKEN_QUEUE_CAPACITY`].
///
/// The returned iterator blocks only while the queue is empty and the producer
/// has not yet sent the next token. It yields the same sequence as
/// [`Tokenizer`], ending with [`Token::End`], and finishes once the producer
/// drops its sender.
///
/// # Example
/// ```
/// use anscalc::interpreter::lexer::{Token, Tokenizer, stream_tokens};
///
/// let line = "max(1, 2) * pi";
/// let streamed: Vec<Token> = stream_tokens(line.to_string()).collect();
/// let direct: Vec<Token> = Tokenizer::new(line).collect();
/// assert_eq!(streamed, direct);
/// ```
#[must_use]
pub fn stream_tokens(line: String) -> mpsc::IntoIter<Token> {
    let (sender, receiver) = mpsc::sync_channel(TOKEN_QUEUE_CAPACITY);

    thread::spawn(move || {
        for token in Tokenizer::new(&line) {
            if sender.send(token).is_err() {
                // Consumer stopped early, e.g. on a parse error.
                break;
            }
        }
    });

    receiver.into_iter()
}

/// Returns the first character in `line` the scanner cannot turn into a
/// token, if any.
///
/// # Example
/// ```
/// use anscalc::interpreter::lexer::first_invalid_character;
///
/// assert_eq!(first_invalid_character("1 + 2"), None);
/// assert_eq!(first_invalid_character("1 # 2 $"), Some('#'));
/// ```
#[must_use]
pub fn first_invalid_character(line: &str) -> Option<char> {
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if token.is_err() {
            return lexer.slice().chars().next();
        }
    }
    None
}
