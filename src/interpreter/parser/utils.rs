use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Halt, ParseResult, parse_expression},
    },
};

/// Builds the `UnexpectedToken` failure for a token kind.
pub(in crate::interpreter::parser) const fn unexpected(token: TokenKind) -> Halt {
    Halt::Failure(ParseError::UnexpectedToken { token })
}

/// Returns the kind of the next token without consuming it.
///
/// An exhausted stream reads as `END`.
pub(in crate::interpreter::parser) fn peek_kind<I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = Token>
{
    tokens.peek().map_or(TokenKind::End, Token::kind)
}

/// Consumes the next token if it has the expected kind.
///
/// # Errors
/// `UnexpectedToken` carrying the kind actually found.
pub(in crate::interpreter::parser) fn expect<I>(tokens: &mut Peekable<I>,
                                                 kind: TokenKind)
                                                 -> ParseResult<Token>
    where I: Iterator<Item = Token>
{
    match tokens.next_if(|tok| tok.kind() == kind) {
        Some(tok) => Ok(tok),
        None => Err(unexpected(peek_kind(tokens))),
    }
}

/// Succeeds only when the whole line has been consumed.
pub(in crate::interpreter::parser) fn expect_end<I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    match peek_kind(tokens) {
        TokenKind::End => Ok(()),
        kind => Err(unexpected(kind)),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// `UnexpectedToken` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<String>
    where I: Iterator<Item = Token>
{
    match tokens.next_if(|tok| tok.kind() == TokenKind::Identifier) {
        Some(Token::Identifier(name)) => Ok(name),
        _ => Err(unexpected(peek_kind(tokens))),
    }
}

/// Parses the comma-separated arguments of a call, after its `(`.
///
/// An immediate `)` produces an empty list. A call left open exactly at the
/// end of the line is accepted as if `)` were there; any other token in place
/// of `,` or `)` is an error.
///
/// Grammar (simplified): `arguments := [expression ("," expression)*] (")" |
/// END)`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `ans`: The last answer, for implicit operands inside arguments.
///
/// # Returns
/// The argument expressions in source order.
pub(in crate::interpreter::parser) fn parse_arguments<I>(tokens: &mut Peekable<I>,
                                                          ans: f64)
                                                          -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = Token>
{
    let mut arguments = Vec::new();
    if tokens.next_if_eq(&Token::RParen).is_some() {
        return Ok(arguments);
    }
    loop {
        arguments.push(parse_expression(tokens, ans)?);
        match peek_kind(tokens) {
            TokenKind::Comma => {
                tokens.next();
            },
            TokenKind::RParen => {
                tokens.next();
                break;
            },
            TokenKind::End => break,
            kind => return Err(unexpected(kind)),
        }
    }
    Ok(arguments)
}
