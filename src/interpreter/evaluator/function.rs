/// Single-argument builtins.
///
/// Square root, absolute value, and the trigonometric family.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two arguments.
pub mod min_max;
/// The `pow` function implementation.
///
/// Raises the first argument to the power of the second.
pub mod pow;
/// The builtin table.
///
/// Resolves names, checks arity and evaluates the arguments of a call.
pub mod core;
