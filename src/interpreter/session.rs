use crate::{
    error::{LineError, ParseError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Tokenizer, first_invalid_character, stream_tokens},
        parser::core::{Parsed, Signal, parse, parse_complete},
    },
    util::format::format_number,
};

/// Session-wide switches, usually filled from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Reject lines containing characters the scanner does not know, instead
    /// of dropping those characters, and lines with tokens left over after
    /// the expression.
    pub strict:    bool,
    /// Tokenize on a producer thread feeding a bounded queue.
    pub streaming: bool,
    /// Print every parsed tree to stderr before evaluating it.
    pub show_ast:  bool,
}

/// The successful result of one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluated {
    /// The line evaluated to a number.
    Value(f64),
    /// The line held a control word.
    Signal(Signal),
}

/// What the driver hands to its output sink for one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A numeric result, possibly NaN or infinite.
    Value(f64),
    /// A failure message for a parse or evaluation error.
    Error(String),
    /// Erase the display.
    Clear,
    /// Terminate the session.
    Exit,
}

impl From<Result<Evaluated, LineError>> for Outcome {
    fn from(result: Result<Evaluated, LineError>) -> Self {
        match result {
            Ok(Evaluated::Value(value)) => Self::Value(value),
            Ok(Evaluated::Signal(Signal::Clear)) => Self::Clear,
            Ok(Evaluated::Signal(Signal::Exit)) => Self::Exit,
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", format_number(*value)),
            Self::Error(message) => write!(f, "{message}"),
            Self::Clear => write!(f, "clear"),
            Self::Exit => write!(f, "exit"),
        }
    }
}

/// Stores the state that outlives a single line.
///
/// The only such state is the "last answer", NaN until the first line
/// evaluates successfully. It is replaced after every successful line and
/// left untouched by failed lines and control words.
///
/// ## Usage
///
/// A `Session` is created once per interactive session and fed one line at a
/// time. Separate sessions never share their last answer.
///
/// # Example
/// ```
/// use anscalc::interpreter::session::{Evaluated, Session};
///
/// let mut session = Session::new();
/// assert!(session.last_answer().is_nan());
///
/// assert_eq!(session.run_line("6*7"), Ok(Evaluated::Value(42.0)));
/// assert_eq!(session.run_line("+1"), Ok(Evaluated::Value(43.0)));
/// assert!(session.run_line("1+").is_err());
/// assert_eq!(session.last_answer(), 43.0);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    ans:    f64,
    config: Config,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a session with the given configuration.
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self { ans: f64::NAN,
               config }
    }

    /// Returns the last successfully computed value.
    #[must_use]
    pub const fn last_answer(&self) -> f64 {
        self.ans
    }

    /// Parses `line` against the current last answer without evaluating it.
    ///
    /// # Example
    /// ```
    /// use anscalc::interpreter::{parser::core::Parsed, session::Session};
    ///
    /// let session = Session::new();
    /// assert!(matches!(session.parse_line("pow(2, 8)"), Parsed::Expr(_)));
    /// ```
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Parsed {
        if self.config.strict
           && let Some(character) = first_invalid_character(line)
        {
            return Parsed::Failure(ParseError::InvalidCharacter { character });
        }

        match (self.config.streaming, self.config.strict) {
            (true, true) => parse_complete(stream_tokens(line.to_string()), self.ans),
            (true, false) => parse(stream_tokens(line.to_string()), self.ans),
            (false, true) => parse_complete(Tokenizer::new(line), self.ans),
            (false, false) => parse(Tokenizer::new(line), self.ans),
        }
    }

    /// Processes one line: tokenize, parse, evaluate.
    ///
    /// On success the last answer is replaced by the result. Failures abort
    /// the line only; the session stays usable.
    ///
    /// # Errors
    /// Returns a [`LineError`] if the line does not parse or evaluate.
    pub fn run_line(&mut self, line: &str) -> Result<Evaluated, LineError> {
        let expr = match self.parse_line(line) {
            Parsed::Expr(expr) => expr,
            Parsed::Signal(signal) => return Ok(Evaluated::Signal(signal)),
            Parsed::Failure(e) => return Err(e.into()),
        };

        if self.config.show_ast {
            eprintln!("{expr:#?}");
        }

        let value = evaluate(&expr)?;
        self.ans = value;

        Ok(Evaluated::Value(value))
    }

    /// Processes one line and converts the result for an output sink.
    ///
    /// # Example
    /// ```
    /// use anscalc::interpreter::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.process("foo(1)"),
    ///            Outcome::Error("function foo does not exist".to_string()));
    /// assert_eq!(session.process("exit"), Outcome::Exit);
    /// ```
    pub fn process(&mut self, line: &str) -> Outcome {
        self.run_line(line).into()
    }
}
