use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
/// When the expression starts directly with `+` or `-`, the missing left
/// operand is the last answer, so `+5` means `ans + 5`.
///
/// The rule is: `additive := ["+" | "-" uses ans] multiplicative (("+" | "-")
/// multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `ans`: The last answer.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<I>(tokens: &mut Peekable<I>, ans: f64) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let mut left = if peek_operator(tokens).is_some_and(BinaryOperator::is_additive) {
        Expr::number(ans)
    } else {
        parse_multiplicative(tokens, ans)?
    };
    loop {
        if let Some(op) = peek_operator(tokens)
           && op.is_additive()
        {
            tokens.next();
            let right = parse_multiplicative(tokens, ans)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. A term that starts
/// directly with `*` or `/` takes the last answer as its left operand, so
/// `*2` means `ans * 2`.
///
/// The rule is: `multiplicative := ["*" | "/" uses ans] primary (("*" | "/")
/// primary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `ans`: The last answer.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<I>(tokens: &mut Peekable<I>, ans: f64) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let mut left = if peek_operator(tokens).is_some_and(BinaryOperator::is_multiplicative) {
        Expr::number(ans)
    } else {
        parse_primary(tokens, ans)?
    };
    loop {
        if let Some(op) = peek_operator(tokens)
           && op.is_multiplicative()
        {
            tokens.next();
            let right = parse_primary(tokens, ans)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, and `None` for
/// all other tokens.
///
/// # Example
/// ```
/// use anscalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

fn peek_operator<I>(tokens: &mut Peekable<I>) -> Option<BinaryOperator>
    where I: Iterator<Item = Token>
{
    tokens.peek().and_then(token_to_binary_operator)
}
