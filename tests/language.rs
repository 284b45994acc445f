use std::fs;

use anscalc::{
    error::{LineError, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::function::core::{BUILTIN_FUNCTIONS, lookup},
        lexer::TokenKind,
        parser::core::Signal,
        session::{Config, Evaluated, Outcome, Session},
    },
};
use walkdir::WalkDir;

#[test]
fn script_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for (input, expected) in extract_transcript(&content) {
            count += 1;
            let actual = render(&session.process(&input));
            assert_eq!(actual, expected, "line `{input}` in {path:?}");
        }
    }

    assert!(count > 0, "No transcript lines found in tests/scripts");
}

/// Splits `input => expected` lines, skipping blanks and `#` comments.
fn extract_transcript(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once(" => "))
           .map(|(input, expected)| (input.to_string(), expected.to_string()))
           .collect()
}

fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Error(message) => format!("error: {message}"),
        other => other.to_string(),
    }
}

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(Evaluated::Value(v)) => assert_eq!(v, expected, "`{src}`"),
        other => panic!("`{src}` gave {other:?}, expected {expected}"),
    }
}

fn assert_failure(src: &str, expected: impl Into<LineError>) {
    assert_eq!(get_result(src), Err(expected.into()), "`{src}`");
}

fn unknown(name: &str) -> RuntimeError {
    RuntimeError::UnknownFunction { name: name.to_string() }
}

fn unexpected(token: TokenKind) -> ParseError {
    ParseError::UnexpectedToken { token }
}

#[test]
fn precedence_and_associativity() {
    assert_value("1+2*3", 7.0);
    assert_value("(1+2)*3", 9.0);
    assert_value("10-4-3", 3.0);
    assert_value("64/4/2", 8.0);
    assert_value("2-3*4+10/5", -8.0);
    assert_value("((2))", 2.0);
}

#[test]
fn builtin_functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("pow(2,10)", 1024.0);
    assert_value("max(3,5)", 5.0);
    assert_value("min(3,5)", 3.0);
    assert_value("abs(1-4)", 3.0);
    assert_value("cos(pi)", -1.0);
    assert_value("tan(0)", 0.0);
    assert_value("asin(1)", std::f64::consts::FRAC_PI_2);
    assert_value("sqrt(pow(3, 2) + pow(4, 2))", 5.0);
}

#[test]
fn every_listed_builtin_resolves() {
    assert_eq!(BUILTIN_FUNCTIONS.len(), 11);
    for name in BUILTIN_FUNCTIONS {
        let builtin = lookup(name).unwrap_or_else(|| panic!("{name} is listed but missing"));
        let args = vec![0.5; builtin.arity];
        assert!(builtin.invoke(&args).is_ok(), "{name}");
    }
}

#[test]
fn arity_mismatch_names_function_and_arity() {
    assert_failure("sqrt(1,2)",
                   RuntimeError::ArgumentCountMismatch { name:  "sqrt".to_string(),
                                                         arity: 1, });
    assert_failure("max(1)",
                   RuntimeError::ArgumentCountMismatch { name:  "max".to_string(),
                                                         arity: 2, });
}

#[test]
fn arity_is_checked_before_arguments_are_evaluated() {
    assert_failure("sqrt(foo(1), 2)",
                   RuntimeError::ArgumentCountMismatch { name:  "sqrt".to_string(),
                                                         arity: 1, });
}

#[test]
fn unknown_function_is_error() {
    assert_failure("foo(1)", unknown("foo"));
    assert_eq!(get_result("foo(1)").unwrap_err().to_string(), "function foo does not exist");
}

#[test]
fn arguments_fail_left_to_right() {
    assert_failure("min(foo(1), bar(2))", unknown("foo"));
    assert_failure("max(foo(1), bar(2))", unknown("foo"));
    assert_failure("min(1, bar(2))", unknown("bar"));
    assert_failure("foo(1) + bar(2)", unknown("foo"));
}

#[test]
fn implicit_operand_uses_last_answer() {
    let mut session = Session::new();
    assert_eq!(session.run_line("12"), Ok(Evaluated::Value(12.0)));
    assert_eq!(session.run_line("+5"), Ok(Evaluated::Value(17.0)));
    assert_eq!(session.run_line("*2"), Ok(Evaluated::Value(34.0)));
    assert_eq!(session.run_line("-4"), Ok(Evaluated::Value(30.0)));
    assert_eq!(session.run_line("/3"), Ok(Evaluated::Value(10.0)));
    assert_eq!(session.run_line("ans*ans"), Ok(Evaluated::Value(100.0)));
}

#[test]
fn first_answer_is_nan() {
    for src in ["ans", "+5", "*2", "ans - ans"] {
        match get_result(src) {
            Ok(Evaluated::Value(v)) => assert!(v.is_nan(), "`{src}` gave {v}"),
            other => panic!("`{src}` gave {other:?}"),
        }
    }
}

#[test]
fn failed_line_keeps_session_usable() {
    let mut session = Session::new();
    session.run_line("5").unwrap();

    assert_eq!(session.run_line("1+"), Err(unexpected(TokenKind::End).into()));
    assert_eq!(session.run_line("foo(ans)"), Err(unknown("foo").into()));
    assert_eq!(session.last_answer(), 5.0);
    assert_eq!(session.run_line("ans+1"), Ok(Evaluated::Value(6.0)));
}

#[test]
fn control_words_override_the_rest_of_the_line() {
    assert_eq!(get_result("clear"), Ok(Evaluated::Signal(Signal::Clear)));
    assert_eq!(get_result("exit"), Ok(Evaluated::Signal(Signal::Exit)));
    assert_eq!(get_result("clear 1 + + )"), Ok(Evaluated::Signal(Signal::Clear)));
    assert_eq!(get_result("1 + exit"), Ok(Evaluated::Signal(Signal::Exit)));
    assert_eq!(get_result("sqrt(clear)"), Ok(Evaluated::Signal(Signal::Clear)));
}

#[test]
fn control_words_do_not_touch_last_answer() {
    let mut session = Session::new();
    session.run_line("3").unwrap();
    assert_eq!(session.process("clear"), Outcome::Clear);
    assert_eq!(session.last_answer(), 3.0);
}

#[test]
fn min_and_max_propagate_nan() {
    for src in ["max(ans, 5)", "min(ans, 5)", "min(0/0, 3)", "max(3, sqrt(0-1))"] {
        assert!(matches!(get_result(src), Ok(Evaluated::Value(v)) if v.is_nan()), "`{src}`");
    }
    assert_value("max(0-1/0, 2)", 2.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_value("1/0", f64::INFINITY);
    assert_value("0-1/0", f64::NEG_INFINITY);
    assert!(matches!(get_result("0/0"), Ok(Evaluated::Value(v)) if v.is_nan()));
    assert!(matches!(get_result("sqrt(0-4)"), Ok(Evaluated::Value(v)) if v.is_nan()));
}

#[test]
fn unterminated_call_is_accepted_only_at_end_of_line() {
    assert_value("sqrt(16", 4.0);
    assert_value("max(3, pow(2, 3", 8.0);
    assert_failure("sqrt(16 2", unexpected(TokenKind::Number));
    assert_failure("sqrt(", unexpected(TokenKind::End));
    assert_failure("(1+2", unexpected(TokenKind::End));
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_value("1 2", 1.0);
    assert_value("(1) (2)", 1.0);
    assert_value("sqrt(4))", 2.0);
    assert_value("3 exit", 3.0);
    assert_value("2 clear", 2.0);
}

#[test]
fn strict_mode_rejects_trailing_tokens() {
    let mut session = Session::with_config(Config { strict: true,
                                                    ..Config::default() });

    assert_eq!(session.run_line("1 2"), Err(unexpected(TokenKind::Number).into()));
    assert_eq!(session.run_line("(1) (2)"), Err(unexpected(TokenKind::LParen).into()));
    assert_eq!(session.run_line("sqrt(4))"), Err(unexpected(TokenKind::RParen).into()));
    assert_eq!(session.run_line("3 exit"), Err(unexpected(TokenKind::Exit).into()));
    assert!(session.last_answer().is_nan());
}

#[test]
fn unknown_characters_are_dropped() {
    assert_value("1 # + 2", 3.0);
    assert_value("$sqrt(16)!", 4.0);
    assert_value("2 ^ 3", 2.0);
}

#[test]
fn strict_mode_reports_unknown_characters() {
    let mut session = Session::with_config(Config { strict: true,
                                                    ..Config::default() });

    assert_eq!(session.run_line("1 # + 2"),
               Err(ParseError::InvalidCharacter { character: '#' }.into()));
    assert_eq!(session.run_line("1 + 2"), Ok(Evaluated::Value(3.0)));
}

#[test]
fn streaming_tokenizer_gives_same_results() {
    let lines = ["1+2*3",
                 "*2",
                 "max(ans, 100)",
                 "1+",
                 "sqrt(1,2)",
                 "clear",
                 "1 2",
                 "pow(2, 2 * (1 + 1) + 1 + 1 + 1 + 1)"];

    let mut direct = Session::new();
    let mut streamed = Session::with_config(Config { streaming: true,
                                                     ..Config::default() });

    for line in lines {
        assert_eq!(direct.process(line), streamed.process(line), "`{line}`");
    }
}

#[test]
fn left_associative_arithmetic_matches_rust() {
    let cases: &[(&str, f64)] = &[("1-2-3-4", 1.0 - 2.0 - 3.0 - 4.0),
                                  ("100/10/5*2", 100.0 / 10.0 / 5.0 * 2.0),
                                  ("1.5*2-0.25/5", 1.5 * 2.0 - 0.25 / 5.0),
                                  ("(7-(2-(1-3)))*0.1", (7.0 - (2.0 - (1.0 - 3.0))) * 0.1),
                                  ("3.25+4*(2-7)/8-1", 3.25 + 4.0 * (2.0 - 7.0) / 8.0 - 1.0)];

    for &(src, expected) in cases {
        assert_value(src, expected);
    }
}
