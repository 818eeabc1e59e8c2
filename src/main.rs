// eduparse: lexer and syntax checker for the teaching language

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use eduparse::listing::{self, Theme, DEFAULT_THEME};
use eduparse::parser::{Lexer, Parser};

/// Tokenize a program, print its token listing, then check its syntax.
#[derive(Debug, ClapParser)]
#[command(name = "eduparse", version, about)]
struct Args {
    /// Source file to check
    file: PathBuf,

    /// Skip the token listing and print only the result
    #[arg(short, long)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the program passed both phases.
fn run(args: &Args) -> Result<bool> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;
    tracing::info!(file = %args.file.display(), "checking");

    let theme: Option<&Theme> =
        (!args.no_color && io::stdout().is_terminal()).then_some(&DEFAULT_THEME);
    let mut stdout = io::stdout().lock();

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            writeln!(stdout, "{}", listing::error_line(&e, theme))?;
            return Ok(false);
        }
    };

    if !args.quiet {
        listing::write_listing(&mut stdout, &tokens, theme)?;
    }

    match Parser::new(&tokens).parse_program() {
        Ok(program) => {
            writeln!(stdout, "{}", listing::success_line(&program, theme))?;
            Ok(true)
        }
        Err(e) => {
            writeln!(stdout, "{}", listing::error_line(&e, theme))?;
            Ok(false)
        }
    }
}
