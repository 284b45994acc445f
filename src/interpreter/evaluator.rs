/// Core evaluation logic.
///
/// Walks an expression tree and produces a number, short-circuiting on the
/// first failure.
pub mod core;

/// Function evaluation.
///
/// Holds the builtin table, arity checks and the builtin implementations.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides helpers shared by builtin implementations.
pub mod utils;
