#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parsed expression.
///
/// Numeric domain problems (division by zero, `sqrt(-1)`, `asin(2)`) are not
/// errors; they evaluate to an infinity or NaN.
pub enum RuntimeError {
    /// Called a function that is not in the builtin table.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a builtin.
    ArgumentCountMismatch {
        /// The name of the function.
        name:  String,
        /// The number of arguments the function requires.
        arity: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "function {name} does not exist"),
            Self::ArgumentCountMismatch { name, arity } => match arity {
                1 => write!(f, "{name} takes one argument"),
                2 => write!(f, "{name} takes two arguments"),
                n => write!(f, "{name} takes {n} arguments"),
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
