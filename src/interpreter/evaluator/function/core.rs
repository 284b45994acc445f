use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, evaluate},
        function::{builtin, min_max, pow},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, in source order.
type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments it requires,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One entry of the builtin table.
        #[derive(Clone, Copy)]
        pub struct BuiltinDef {
            /// Name the function is called by.
            pub name:  &'static str,
            /// Exact number of arguments required.
            pub arity: usize,
            func:      BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt" => { arity: 1, func: builtin::sqrt },
    "abs"  => { arity: 1, func: builtin::abs },
    "pow"  => { arity: 2, func: pow::pow },
    "cos"  => { arity: 1, func: builtin::cos },
    "sin"  => { arity: 1, func: builtin::sin },
    "tan"  => { arity: 1, func: builtin::tan },
    "acos" => { arity: 1, func: builtin::acos },
    "asin" => { arity: 1, func: builtin::asin },
    "atan" => { arity: 1, func: builtin::atan },
    "max"  => { arity: 2, func: |args| min_max::min_max("max", args) },
    "min"  => { arity: 2, func: |args| min_max::min_max("min", args) },
}

impl BuiltinDef {
    /// Invokes the implementation on already evaluated arguments.
    ///
    /// # Example
    /// ```
    /// use anscalc::interpreter::evaluator::function::core::lookup;
    ///
    /// let pow = lookup("pow").unwrap();
    /// assert_eq!(pow.arity, 2);
    /// assert_eq!(pow.invoke(&[2.0, 10.0]), Ok(1024.0));
    /// ```
    pub fn invoke(&self, args: &[f64]) -> EvalResult<f64> {
        (self.func)(args)
    }
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use anscalc::interpreter::evaluator::function::core::lookup;
///
/// assert_eq!(lookup("sqrt").map(|b| b.arity), Some(1));
/// assert!(lookup("foo").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Evaluates a function call.
///
/// The call is resolved in three steps:
/// 1. the name is looked up in the builtin table,
/// 2. the argument count is checked against the builtin's arity, before any
///    argument is evaluated,
/// 3. the arguments are evaluated strictly left to right, the first failure
///    aborting the call, and the implementation is invoked on the results.
///
/// # Parameters
/// - `name`: Function name.
/// - `arguments`: Unevaluated argument expressions.
///
/// # Returns
/// The function result or an error if lookup, arity or an argument fails.
///
/// # Example
/// ```
/// use anscalc::{
///     ast::Expr,
///     error::RuntimeError,
///     interpreter::evaluator::function::core::call_builtin,
/// };
///
/// assert_eq!(call_builtin("sqrt", &[Expr::number(16.0)]), Ok(4.0));
/// assert_eq!(call_builtin("sqrt", &[Expr::number(1.0), Expr::number(2.0)]),
///            Err(RuntimeError::ArgumentCountMismatch { name:  "sqrt".to_string(),
///                                                      arity: 1, }));
/// ```
pub fn call_builtin(name: &str, arguments: &[Expr]) -> EvalResult<f64> {
    let builtin =
        lookup(name).ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

    if arguments.len() != builtin.arity {
        return Err(RuntimeError::ArgumentCountMismatch { name:  builtin.name.to_string(),
                                                         arity: builtin.arity, });
    }

    let args = arguments.iter().map(evaluate).collect::<EvalResult<Vec<_>>>()?;

    builtin.invoke(&args)
}
