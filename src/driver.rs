use std::io::{self, BufRead, Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::interpreter::session::{Outcome, Session};

/// ANSI sequence that erases the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Supplies input lines, one per call, without trailing newlines.
pub trait LineSource {
    /// Returns the next line, `None` once input is exhausted.
    fn next_line(&mut self) -> Option<io::Result<String>>;
}

/// Receives the outcome of every processed line.
pub trait OutputSink {
    /// Handles one outcome.
    ///
    /// # Errors
    /// Returns an I/O error if the outcome cannot be written.
    fn emit(&mut self, outcome: &Outcome) -> io::Result<()>;
}

impl<B: BufRead> LineSource for io::Lines<B> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.next()
    }
}

impl LineSource for std::vec::IntoIter<String> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.next().map(Ok)
    }
}

/// Collects outcomes in memory.
impl OutputSink for Vec<Outcome> {
    fn emit(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.push(outcome.clone());
        Ok(())
    }
}

/// Interactive line source backed by a `rustyline` editor with history.
pub struct ReplSource {
    editor: DefaultEditor,
    prompt: String,
}

impl ReplSource {
    /// Creates an editor showing `prompt`.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(prompt: &str) -> rustyline::Result<Self> {
        Ok(Self { editor: DefaultEditor::new()?,
                  prompt: prompt.to_string(), })
    }
}

impl LineSource for ReplSource {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                   && let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    eprintln!("Failed to record history: {err}");
                }
                Some(Ok(line))
            },
            // Ctrl-C abandons the current line only.
            Err(ReadlineError::Interrupted) => Some(Ok(String::new())),
            Err(ReadlineError::Eof) => None,
            Err(ReadlineError::Io(e)) => Some(Err(e)),
            Err(err) => Some(Err(io::Error::other(err.to_string()))),
        }
    }
}

/// Writes outcomes to a terminal or any other writer.
///
/// Values and errors are printed one per line; `Clear` erases the screen
/// with [`CLEAR_SCREEN`]; `Exit` prints nothing.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn emit(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Value(_) | Outcome::Error(_) => writeln!(self.out, "{outcome}")?,
            Outcome::Clear => write!(self.out, "{CLEAR_SCREEN}")?,
            Outcome::Exit => {},
        }
        self.out.flush()
    }
}

/// Feeds every line from `source` through `session` into `sink`.
///
/// Blank lines are skipped. The loop ends when the source is exhausted or
/// a line yields [`Outcome::Exit`], which is still passed to the sink.
///
/// # Returns
/// `true` if the loop ended on `exit`.
///
/// # Errors
/// Returns the first I/O error from the source or the sink.
///
/// # Example
/// ```
/// use anscalc::{
///     driver::run,
///     interpreter::session::{Outcome, Session},
/// };
///
/// let lines = vec!["2*3".to_string(), "".to_string(), "+1".to_string(), "exit".to_string(),
///                  "99".to_string()];
/// let mut outcomes: Vec<Outcome> = Vec::new();
///
/// let exited = run(&mut lines.into_iter(), &mut outcomes, &mut Session::new()).unwrap();
///
/// assert!(exited);
/// assert_eq!(outcomes, vec![Outcome::Value(6.0), Outcome::Value(7.0), Outcome::Exit]);
/// ```
pub fn run<S, O>(source: &mut S, sink: &mut O, session: &mut Session) -> io::Result<bool>
    where S: LineSource,
          O: OutputSink
{
    while let Some(line) = source.next_line() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = session.process(&line);
        sink.emit(&outcome)?;

        if outcome == Outcome::Exit {
            return Ok(true);
        }
    }
    Ok(false)
}
