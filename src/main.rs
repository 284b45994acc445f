use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anscalc::{
    driver::{ReplSource, TerminalSink, run},
    interpreter::session::{Config, Outcome, Session},
};
use clap::Parser;

/// anscalc evaluates arithmetic expressions one line at a time and remembers
/// the last answer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every line of a file instead of starting the prompt.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Reject characters that are not part of any token instead of dropping
    /// them, and tokens left over after the expression.
    #[arg(short, long)]
    strict: bool,

    /// Tokenize on a separate thread through a bounded queue.
    #[arg(long)]
    streaming: bool,

    /// Print each parsed expression tree to stderr.
    #[arg(long)]
    ast: bool,

    /// An expression to evaluate once; words are joined with spaces.
    expression: Vec<String>,
}

impl Args {
    const fn config(&self) -> Config {
        Config { strict:    self.strict,
                 streaming: self.streaming,
                 show_ast:  self.ast, }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut session = Session::with_config(args.config());

    if !args.expression.is_empty() {
        return run_once(&args.expression.join(" "), &mut session);
    }

    let result = if let Some(path) = &args.file {
        run_file(path, &mut session)
    } else if io::stdin().is_terminal() {
        run_repl(&mut session)
    } else {
        run_lines(io::stdin().lock(), &mut session)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_once(line: &str, session: &mut Session) -> ExitCode {
    match session.process(line) {
        Outcome::Error(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        },
        Outcome::Value(value) => {
            println!("{}", Outcome::Value(value));
            ExitCode::SUCCESS
        },
        Outcome::Clear | Outcome::Exit => ExitCode::SUCCESS,
    }
}

fn run_file(path: &Path, session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| {
                                   format!("Failed to read the input file '{}': {e}",
                                           path.display())
                               })?;
    run_lines(BufReader::new(file), session)
}

fn run_lines<R: BufRead>(reader: R, session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let mut sink = TerminalSink::new(io::stdout().lock());
    run(&mut reader.lines(), &mut sink, session)?;
    Ok(())
}

fn run_repl(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let mut source = ReplSource::new("> ")?;
    let mut sink = TerminalSink::new(io::stdout());
    run(&mut source, &mut sink, session)?;
    Ok(())
}
