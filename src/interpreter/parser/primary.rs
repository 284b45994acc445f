use std::{f64::consts, iter::Peekable};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{Halt, ParseResult, Signal, parse_expression},
            utils::{expect, parse_arguments, parse_identifier, unexpected},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - `ans`, `pi` and `e`
/// - function calls
/// - parenthesized expressions
///
/// The control words `clear` and `exit` are not expressions: meeting one here
/// stops the descent with the matching [`Signal`], whatever else the line
/// holds.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | "ans" | "pi" | "e"
///              | IDENTIFIER "(" arguments
///              | "(" expression ")"
///              | "clear" | "exit"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `ans`: The last answer.
///
/// # Returns
/// The parsed primary [`Expr`], a signal, or a `ParseError` on failure.
pub(crate) fn parse_primary<I>(tokens: &mut Peekable<I>, ans: f64) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let Some(peeked) = tokens.peek() else {
        return Err(unexpected(TokenKind::End));
    };

    match peeked {
        Token::Number(_) => parse_number(tokens),
        Token::Ans => parse_constant(tokens, ans),
        Token::Pi => parse_constant(tokens, consts::PI),
        Token::E => parse_constant(tokens, consts::E),
        Token::Identifier(_) => parse_function_call(tokens, ans),
        Token::LParen => parse_grouping(tokens, ans),
        Token::Clear => Err(Halt::Signal(Signal::Clear)),
        Token::Exit => Err(Halt::Signal(Signal::Exit)),
        tok => Err(unexpected(tok.kind())),
    }
}

/// Parses a numeric literal.
///
/// # Errors
/// `InvalidNumber` if the lexeme does not convert to an `f64`.
fn parse_number<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    match tokens.next() {
        Some(Token::Number(literal)) => match literal.parse::<f64>() {
            Ok(value) => Ok(Expr::number(value)),
            Err(_) => Err(ParseError::InvalidNumber { literal }.into()),
        },
        Some(tok) => Err(unexpected(tok.kind())),
        None => Err(unexpected(TokenKind::End)),
    }
}

/// Consumes a keyword token and yields its fixed value.
fn parse_constant<I>(tokens: &mut Peekable<I>, value: f64) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    tokens.next();
    Ok(Expr::number(value))
}

/// Parses a function call such as `pow(2, 10)`.
///
/// The argument list may be empty; arity is checked at evaluation time.
///
/// Grammar: `call := IDENTIFIER "(" [expression ("," expression)*] ")"`
///
/// # Errors
/// - `UnexpectedToken` if `(` does not follow the name.
/// - Propagates any errors from argument parsing.
fn parse_function_call<I>(tokens: &mut Peekable<I>, ans: f64) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LParen)?;
    let arguments = parse_arguments(tokens, ans)?;

    Ok(Expr::FunctionCall { name, arguments })
}

/// Parses a parenthesized expression. The closing `)` is required.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<I>(tokens: &mut Peekable<I>, ans: f64) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    expect(tokens, TokenKind::LParen)?;
    let inner = parse_expression(tokens, ans)?;
    expect(tokens, TokenKind::RParen)?;

    Ok(inner)
}
