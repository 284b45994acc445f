use crate::interpreter::evaluator::{core::EvalResult, utils::check_arity};

/// Applies a single-argument `f64` method as a builtin.
///
/// The generated functions accept exactly one argument. Domain errors of the
/// underlying math are not intercepted: `sqrt(-1)` or `asin(2)` return NaN.
///
/// # Example
/// ```
/// use anscalc::interpreter::evaluator::function::builtin::{asin, sin};
///
/// let r = sin(&[std::f64::consts::PI / 2.0]).unwrap();
/// assert_eq!(r, 1.0);
///
/// assert!(asin(&[2.0]).unwrap().is_nan());
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, 1)?;

            Ok(args[0].$real_fn())
        }
    };
}

real_builtin!(sqrt, sqrt);
real_builtin!(abs, abs);
real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
