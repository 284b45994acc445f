use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, utils::expect_end},
    },
};

/// Result type used inside the recursive descent.
///
/// The error side is a [`Halt`], so that `?` unwinds the descent both for
/// failures and for the `clear`/`exit` control words.
pub type ParseResult<T> = Result<T, Halt>;

/// A directive for the driver rather than a value to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Erase the display.
    Clear,
    /// Terminate the session.
    Exit,
}

/// Why the recursive descent stopped before producing a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// A control word was met as a primary.
    Signal(Signal),
    /// The input did not match the grammar.
    Failure(ParseError),
}

impl From<ParseError> for Halt {
    fn from(e: ParseError) -> Self {
        Self::Failure(e)
    }
}

/// The outcome of parsing one line.
///
/// Callers dispatch on the variant; control signals are never encoded as
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A well formed expression tree.
    Expr(Expr),
    /// `clear` or `exit` appeared as a primary.
    Signal(Signal),
    /// The line was rejected.
    Failure(ParseError),
}

/// Parses a line, ignoring any tokens after the first complete expression.
///
/// `ans` is the current "last answer". It is substituted for the `ans`
/// keyword and for the missing left operand of a leading operator.
///
/// # Parameters
/// - `tokens`: The line's tokens, ending with [`Token::End`].
/// - `ans`: The session's last answer.
///
/// # Returns
/// The tagged [`Parsed`] outcome.
///
/// # Example
/// ```
/// use anscalc::{
///     ast::{BinaryOperator, Expr},
///     error::ParseError,
///     interpreter::{
///         lexer::{TokenKind, Tokenizer},
///         parser::core::{Parsed, Signal, parse},
///     },
/// };
///
/// assert_eq!(parse(Tokenizer::new("*2"), 21.0),
///            Parsed::Expr(Expr::binary(Expr::number(21.0),
///                                      BinaryOperator::Mul,
///                                      Expr::number(2.0))));
///
/// assert_eq!(parse(Tokenizer::new("clear 1 2 3"), 0.0),
///            Parsed::Signal(Signal::Clear));
///
/// assert_eq!(parse(Tokenizer::new("3 exit"), 0.0), Parsed::Expr(Expr::number(3.0)));
///
/// assert_eq!(parse(Tokenizer::new("1+"), 0.0),
///            Parsed::Failure(ParseError::UnexpectedToken { token: TokenKind::End }));
/// ```
pub fn parse<I>(tokens: I, ans: f64) -> Parsed
    where I: Iterator<Item = Token>
{
    let mut tokens = tokens.peekable();
    parse_expression(&mut tokens, ans).into()
}

/// Parses a line that must be consumed up to [`Token::End`].
///
/// Used in strict mode. A token left over after the expression is reported
/// as `UnexpectedToken`.
///
/// # Example
/// ```
/// use anscalc::{
///     error::ParseError,
///     interpreter::{
///         lexer::{TokenKind, Tokenizer},
///         parser::core::{Parsed, parse_complete},
///     },
/// };
///
/// assert_eq!(parse_complete(Tokenizer::new("1 2"), 0.0),
///            Parsed::Failure(ParseError::UnexpectedToken { token: TokenKind::Number }));
/// ```
pub fn parse_complete<I>(tokens: I, ans: f64) -> Parsed
    where I: Iterator<Item = Token>
{
    let mut tokens = tokens.peekable();

    parse_expression(&mut tokens, ans).and_then(|expr| {
                                          expect_end(&mut tokens)?;
                                          Ok(expr)
                                      })
                                      .into()
}

impl From<ParseResult<Expr>> for Parsed {
    fn from(result: ParseResult<Expr>) -> Self {
        match result {
            Ok(expr) => Self::Expr(expr),
            Err(Halt::Signal(signal)) => Self::Signal(signal),
            Err(Halt::Failure(e)) => Self::Failure(e),
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, also used for
/// parenthesized groups and function arguments. It begins at the lowest
/// precedence tier.
///
/// Grammar: `expression := additive`
pub fn parse_expression<I>(tokens: &mut Peekable<I>, ans: f64) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    parse_additive(tokens, ans)
}
