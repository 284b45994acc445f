use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Checks if the argument list matches the expected count.
/// Returns an error naming the function if the count does not match.
///
/// ## Example
/// ```
/// use anscalc::interpreter::evaluator::utils::check_arity;
///
/// assert!(check_arity("pow", &[2.0, 10.0], 2).is_ok());
/// assert!(check_arity("sqrt", &[1.0, 2.0], 1).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                                  arity: expected, })
    }
}
