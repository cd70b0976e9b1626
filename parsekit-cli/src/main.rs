//! `parsekit`: prints the tokens (or, with `--parse`, the syntax tree) of a
//! file, or of each line typed at an interactive prompt.

mod logging;

use clap::Parser as _;
use lexer_framework::LexError;
use parser_framework::{reference, ParseError, Parser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error};

const PROMPT: &str = "> ";

#[derive(Debug, clap::Parser)]
#[command(
    name = "parsekit",
    version,
    about = "Tools to help with lexing and parsing languages"
)]
struct Cli {
    /// Source file to process. Starts an interactive prompt when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Run in debug mode
    #[arg(long)]
    debug: bool,

    /// Print the syntax tree instead of the tokens
    #[arg(long)]
    parse: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// What to print for one piece of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Tokens,
    Tree,
}

fn process(parser: &Parser, output: Output, input: &str, out: &mut impl Write) -> Result<(), CliError> {
    match output {
        Output::Tokens => {
            let tokens = parser.lexer().lex(input)?;
            writeln!(out, "{tokens:#?}")?;
        }
        Output::Tree => {
            let file = parser.parse(input)?;
            writeln!(out, "{file:#?}")?;
        }
    }
    Ok(())
}

fn run_file(parser: &Parser, output: Output, path: &Path) -> Result<(), CliError> {
    let input = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(target: "parsekit::cli", path = %path.display(), bytes = input.len(), "read input");

    process(parser, output, &input, &mut io::stdout().lock())
}

/// Reads one line at a time until `exit`, two empty lines in a row, or end
/// of input. A line that fails to lex or parse is reported and skipped.
fn repl(
    parser: &Parser,
    output: Output,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(
        out,
        "Welcome to parsekit! To exit, either type \"exit\" or press enter twice.\n"
    )?;

    let mut empty_lines = 0;
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim_end() {
            "" => {
                empty_lines += 1;
                if empty_lines == 2 {
                    writeln!(out, "Detected two consecutive ENTER presses. Exiting.")?;
                    break;
                }
            }
            "exit" => break,
            line => {
                empty_lines = 0;
                match process(parser, output, line, out) {
                    Ok(()) => {}
                    Err(CliError::Io(err)) => return Err(CliError::Io(err)),
                    Err(err) => error!(target: "parsekit::cli", "{err}"),
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let parser = reference::parser();
    let output = if cli.parse {
        Output::Tree
    } else {
        Output::Tokens
    };

    let result = match &cli.file {
        Some(path) => run_file(&parser, output, path),
        None => repl(&parser, output, io::stdin().lock(), &mut io::stdout().lock()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "parsekit::cli", "{err}");
            ExitCode::FAILURE
        }
    }
}
