//! maketext CLI entry point.
//!
//! Provides command-line tools for working with maketext phrases:
//! - `maketext eval` - Evaluate a phrase against a locale
//! - `maketext check` - Validate the bracket notation of lexicon phrases
//! - `maketext coverage` - Report lexicon translation coverage

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CheckArgs, CoverageArgs, EvalArgs, run_check, run_coverage, run_eval};
use tracing_subscriber::EnvFilter;

/// maketext phrase and lexicon tools.
#[derive(Debug, Parser)]
#[command(name = "maketext")]
#[command(about = "maketext phrase and lexicon tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the bracket notation of phrases
    Check(CheckArgs),
    /// Report lexicon coverage across languages
    Coverage(CoverageArgs),
    /// Evaluate a maketext phrase
    Eval(EvalArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send library diagnostics to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "maketext=debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Eval(args) => run_eval(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
