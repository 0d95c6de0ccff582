//! Implementation of the `maketext check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use maketext::parser::parse_template;
use maketext::{FunctionRegistry, compute_suggestions};
use miette::{IntoDiagnostic, Report, WrapErr};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use crate::commands::read_lexicon;
use crate::output::PhraseDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check: JSON lexicons, or text with one phrase per line
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one problem.
#[derive(Debug, Serialize)]
struct ProblemJson {
    file: String,
    phrase: String,
    offset: usize,
    message: String,
}

/// Phrases of a file with a label for each (lexicon key or line number).
fn collect_phrases(path: &Path) -> miette::Result<Vec<(String, String)>> {
    if path.extension().is_some_and(|ext| ext == "json") {
        return Ok(read_lexicon(path)?.into_iter().collect());
    }
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;
    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (format!("line {}", i + 1), line.to_string()))
        .collect())
}

/// Check one phrase, returning its problems.
pub(crate) fn check_phrase(
    origin: &str,
    phrase: &str,
    functions: &FunctionRegistry,
) -> Vec<PhraseDiagnostic> {
    let template = match parse_template(phrase) {
        Ok(template) => template,
        Err(e) => return vec![PhraseDiagnostic::from_parse_error(origin, phrase, &e)],
    };
    template
        .function_names()
        .filter(|(name, _)| !functions.has_function(name))
        .map(|(name, offset)| {
            let suggestions = compute_suggestions(name, functions.names());
            PhraseDiagnostic::unknown_function(origin, phrase, offset, name, &suggestions)
        })
        .collect()
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let functions = FunctionRegistry::with_builtins();
    let mut problems = Vec::new();

    for file in &args.files {
        let phrases = collect_phrases(file)?;
        debug!(file = %file.display(), count = phrases.len(), "checking phrases");
        let mut file_problems = 0;
        for (label, phrase) in &phrases {
            let origin = format!("{} ({label})", file.display());
            for diagnostic in check_phrase(&origin, phrase, &functions) {
                file_problems += 1;
                problems.push((file.display().to_string(), phrase.clone(), diagnostic));
            }
        }
        if !args.json && file_problems == 0 {
            println!(
                "{} {}: {} phrases",
                "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                file.display(),
                phrases.len()
            );
        }
    }

    let failed = !problems.is_empty();
    if args.json {
        let output: Vec<ProblemJson> = problems
            .iter()
            .map(|(file, phrase, diagnostic)| ProblemJson {
                file: file.clone(),
                phrase: phrase.clone(),
                offset: diagnostic.offset(),
                message: diagnostic.message().to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        for (_, _, diagnostic) in problems {
            eprintln!("{:?}", Report::new(diagnostic));
        }
    }

    Ok(if failed {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}
