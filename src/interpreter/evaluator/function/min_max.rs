use crate::interpreter::evaluator::{core::EvalResult, utils::check_arity};

/// Computes the minimum or maximum of two numeric values.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. A NaN argument makes the result NaN.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
///
/// # Example
/// ```
/// use anscalc::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[3.0, 7.0]), Ok(3.0));
/// assert_eq!(min_max("max", &[2.5, 1.0]), Ok(2.5));
/// assert!(min_max("max", &[f64::NAN, 1.0]).unwrap().is_nan());
/// assert!(min_max("min", &[3.0, f64::NAN]).unwrap().is_nan());
/// ```
pub fn min_max(name: &str, args: &[f64]) -> EvalResult<f64> {
    check_arity(name, args, 2)?;

    let (left, right) = (args[0], args[1]);
    let value = if left.is_nan() || right.is_nan() {
        f64::NAN
    } else if name == "min" {
        left.min(right)
    } else {
        left.max(right)
    };

    Ok(value)
}
