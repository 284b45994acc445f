/// Parsing errors.
///
/// Raised while turning a line into an expression tree: an unexpected token,
/// an unconvertible number literal, or (in strict mode) an unknown character.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while evaluating a tree: unknown functions and arity mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts the processing of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line could not be parsed.
    Parse(ParseError),
    /// The parsed expression could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for LineError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for LineError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LineError {}
