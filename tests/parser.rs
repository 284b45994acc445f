use anscalc::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, Tokenizer},
        parser::core::{Parsed, Signal, parse, parse_complete},
    },
};

fn parse_line(src: &str, ans: f64) -> Parsed {
    parse(Tokenizer::new(src), ans)
}

fn tree(src: &str, ans: f64) -> Expr {
    match parse_line(src, ans) {
        Parsed::Expr(expr) => expr,
        other => panic!("`{src}` gave {other:?}"),
    }
}

fn failure(src: &str) -> ParseError {
    match parse_complete(Tokenizer::new(src), 0.0) {
        Parsed::Failure(e) => e,
        other => panic!("`{src}` gave {other:?}"),
    }
}

fn n(value: f64) -> Expr {
    Expr::number(value)
}

fn call(name: &str, arguments: Vec<Expr>) -> Expr {
    Expr::FunctionCall { name: name.to_string(),
                         arguments }
}

#[test]
fn operators_fold_left() {
    assert_eq!(tree("8-3-2", 0.0),
               Expr::binary(Expr::binary(n(8.0), BinaryOperator::Sub, n(3.0)),
                            BinaryOperator::Sub,
                            n(2.0)));
    assert_eq!(tree("8/4*2", 0.0),
               Expr::binary(Expr::binary(n(8.0), BinaryOperator::Div, n(4.0)),
                            BinaryOperator::Mul,
                            n(2.0)));
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(tree("1+2*3", 0.0),
               Expr::binary(n(1.0),
                            BinaryOperator::Add,
                            Expr::binary(n(2.0), BinaryOperator::Mul, n(3.0))));
}

#[test]
fn leading_operator_takes_last_answer() {
    assert_eq!(tree("+5", 1.5), Expr::binary(n(1.5), BinaryOperator::Add, n(5.0)));
    assert_eq!(tree("-5", 1.5), Expr::binary(n(1.5), BinaryOperator::Sub, n(5.0)));
    assert_eq!(tree("/2", 1.5), Expr::binary(n(1.5), BinaryOperator::Div, n(2.0)));
    assert_eq!(tree("2+*3", 4.0),
               Expr::binary(n(2.0),
                            BinaryOperator::Add,
                            Expr::binary(n(4.0), BinaryOperator::Mul, n(3.0))));
}

#[test]
fn keywords_become_numbers() {
    assert_eq!(tree("ans", 9.0), n(9.0));
    assert_eq!(tree("ans", f64::NAN), n(f64::NAN));
    assert_eq!(tree("pi", 0.0), n(std::f64::consts::PI));
    assert_eq!(tree("e", 0.0), n(std::f64::consts::E));
}

#[test]
fn function_calls_keep_argument_order() {
    assert_eq!(tree("pow(2, 1+1)", 0.0),
               call("pow", vec![n(2.0), Expr::binary(n(1.0), BinaryOperator::Add, n(1.0))]));
    assert_eq!(tree("sqrt()", 0.0), call("sqrt", vec![]));
    assert_eq!(tree("unknown(1)", 0.0), call("unknown", vec![n(1.0)]));
    assert_eq!(tree("max(1, 2", 0.0), call("max", vec![n(1.0), n(2.0)]));
}

#[test]
fn signals_are_not_failures() {
    assert_eq!(parse_line("clear", 0.0), Parsed::Signal(Signal::Clear));
    assert_eq!(parse_line("exit", 0.0), Parsed::Signal(Signal::Exit));
    assert_eq!(parse_line("(2 * exit", 0.0), Parsed::Signal(Signal::Exit));
}

#[test]
fn first_mismatch_is_reported_by_kind() {
    let unexpected = |token| ParseError::UnexpectedToken { token };

    assert_eq!(failure("1+"), unexpected(TokenKind::End));
    assert_eq!(failure(""), unexpected(TokenKind::End));
    assert_eq!(failure("foo"), unexpected(TokenKind::End));
    assert_eq!(failure("foo 1"), unexpected(TokenKind::Number));
    assert_eq!(failure("max(1,)"), unexpected(TokenKind::RParen));
    assert_eq!(failure("()"), unexpected(TokenKind::RParen));
    assert_eq!(failure("1,2"), unexpected(TokenKind::Comma));
    assert_eq!(failure("(1 2)"), unexpected(TokenKind::Number));
    assert_eq!(failure("1+2 )"), unexpected(TokenKind::RParen));
}

#[test]
fn leftover_tokens_are_ignored_unless_complete() {
    assert_eq!(tree("1 2", 0.0), n(1.0));
    assert_eq!(tree("4 * 2 )", 0.0), Expr::binary(n(4.0), BinaryOperator::Mul, n(2.0)));
    assert_eq!(tree("3 exit", 0.0), n(3.0));

    assert_eq!(failure("3 exit"), ParseError::UnexpectedToken { token: TokenKind::Exit });
    assert_eq!(parse_complete(Tokenizer::new("3"), 0.0), Parsed::Expr(n(3.0)));
}
