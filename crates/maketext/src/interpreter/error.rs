//! Error types for the maketext interpreter.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading lexicons or CLDR bundles.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("{path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An error that occurred while evaluating a maketext string.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The template is not valid bracket notation.
    #[error("invalid maketext string '{template}': {source}")]
    Syntax {
        template: String,
        #[source]
        source: ParseError,
    },

    /// A `_N` reference names an argument that was not supplied.
    #[error("missing argument _{index} in '{template}'")]
    MissingArgument { index: usize, template: String },

    /// A bracket group names a function the locale does not provide.
    #[error("unknown function '{name}' in '{template}'{}", format_suggestions(suggestions))]
    UnknownFunction {
        name: String,
        template: String,
        suggestions: Vec<String>,
    },

    /// A bracket function rejected its arguments.
    #[error("invalid argument to '{function}': {message}")]
    InvalidArgument { function: String, message: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for an unknown name.
///
/// Returns candidates within edit distance 2 (1 for short names), closest
/// first, at most three.
pub fn compute_suggestions<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = candidates
        .into_iter()
        .map(|candidate| (levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
