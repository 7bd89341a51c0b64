use std::process::ExitCode;

use clap::Parser;
use estimate::Estimate;
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "> ";

const HELP: &str = "\
Evaluates time estimate expressions, such as 5w + 7d (which results in 1m 2w 2d).

Terms are a number followed by a unit: h (hour), d (day), w (week), m (month)
or y (year). Join terms with + or -; a term with no operator is added.
A day is 8h, a week 5d, a month 4w and a year 12m.

Commands: help, quit, exit.";

/// estimate adds up working-calendar time estimates such as `2w + 3d - 5h`.
///
/// With an expression argument it prints that expression's total and exits;
/// without one it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Enables debug logging on stderr. `RUST_LOG` overrides the level.
    #[arg(short, long)]
    verbose: bool,

    /// Expression to evaluate once instead of starting the prompt.
    expression: Option<String>,
}

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Empty,
    Help,
    Quit,
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Empty,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            expression => Self::Evaluate(expression),
        }
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

/// Evaluates one line and renders either its total or its error.
fn render(expression: &str) -> Result<String, String> {
    match expression.parse::<Estimate>() {
        Ok(total) => Ok(total.to_string()),
        Err(e) => {
            tracing::debug!(expression, error = %e, "evaluation failed");
            Err(e.to_string())
        },
    }
}

fn run_prompt() -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!();
                println!("Bye");
                return Ok(());
            },
            Err(e) => return Err(e),
        };

        match Command::parse(&line) {
            Command::Empty => {},
            Command::Help => println!("{HELP}"),
            Command::Quit => {
                println!("Bye");
                return Ok(());
            },
            Command::Evaluate(expression) => {
                if let Err(e) = editor.add_history_entry(expression) {
                    tracing::warn!("could not add line to history: {e}");
                }
                match render(expression) {
                    Ok(total) | Err(total) => println!("{total}"),
                }
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Some(expression) = args.expression {
        return match render(&expression) {
            Ok(total) => {
                println!("{total}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = run_prompt() {
        tracing::error!("prompt failed: {e}");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
