//! # anscalc
//!
//! anscalc is an interactive arithmetic expression evaluator written in Rust.
//! Each input line is tokenized, parsed into an expression tree, and evaluated
//! against a fixed table of builtin functions. The last successful result is
//! remembered and can be reused with `ans` or with a leading operator such as
//! `+5` or `*2`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::LineError,
    interpreter::session::{Evaluated, Session},
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` enum and the arithmetic operators. The AST
/// is built by the parser and read by the evaluator.
///
/// # Responsibilities
/// - Defines number, binary operation and function call nodes.
/// - Implements the IEEE-754 arithmetic of each operator.
pub mod ast;
/// Line sources, output sinks and the read-evaluate-print loop.
///
/// Terminal input and display are kept behind two small traits so that the
/// loop can be driven by an interactive editor, a file, or a test.
pub mod driver;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (parser, evaluator).
/// - Renders the messages shown to the user.
pub mod error;
/// Orchestrates the processing of each line.
///
/// Ties together lexing, parsing, evaluation and the session state.
pub mod interpreter;
/// General utilities.
///
/// Output formatting of numbers.
pub mod util;

/// Evaluates a single line in a fresh session.
///
/// The last answer of a fresh session is NaN, so `ans` or a leading operator
/// yields NaN here.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use anscalc::{get_result, interpreter::session::Evaluated};
///
/// assert_eq!(get_result("(1+2)*3"), Ok(Evaluated::Value(9.0)));
///
/// // Unknown function.
/// assert!(get_result("foo(1)").is_err());
/// ```
pub fn get_result(line: &str) -> Result<Evaluated, LineError> {
    Session::new().run_line(line)
}
