use crate::interpreter::evaluator::{core::EvalResult, utils::check_arity};

/// Raises `args[0]` to the power `args[1]`.
///
/// Uses `f64::powf`, so a negative base with a fractional exponent gives
/// NaN rather than an error.
///
/// # Example
/// ```
/// use anscalc::interpreter::evaluator::function::pow::pow;
///
/// assert_eq!(pow(&[2.0, 10.0]), Ok(1024.0));
/// assert!(pow(&[-8.0, 1.0 / 3.0]).unwrap().is_nan());
/// ```
pub fn pow(args: &[f64]) -> EvalResult<f64> {
    check_arity("pow", args, 2)?;

    Ok(args[0].powf(args[1]))
}
