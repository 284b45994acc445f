use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::function::core::call_builtin};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting number.
///
/// The evaluator dispatches on the node variant:
/// - literals evaluate to their stored value,
/// - binary operations evaluate the left operand, then the right one, then
///   apply the operator with IEEE-754 semantics,
/// - function calls are resolved through the builtin table.
///
/// The tree is only read. The first failure aborts the whole evaluation.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed `f64`, which may be NaN or infinite.
///
/// # Example
/// ```
/// use anscalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let expr = Expr::binary(Expr::number(1.0), BinaryOperator::Div, Expr::number(0.0));
/// assert_eq!(evaluate(&expr), Ok(f64::INFINITY));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value } => Ok(value.into_inner()),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            Ok(op.apply(left, right))
        },
        Expr::FunctionCall { name, arguments } => call_builtin(name, arguments),
    }
}
