//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::commands::read_lexicon;
use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source lexicon (e.g., en.json); its keys are the phrases to translate.
    #[arg(long)]
    pub source: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing `<lang>.json` lexicons. Defaults to the source
    /// file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    lexicon_found: bool,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    stale: Vec<String>,
}

/// Coverage of one lexicon against the source phrases.
///
/// `translated` is `None` when the language has no lexicon file.
pub(crate) fn language_coverage(
    language: &str,
    source: &BTreeSet<String>,
    translated: Option<&BTreeSet<String>>,
) -> LanguageCoverage {
    let empty = BTreeSet::new();
    let keys = translated.unwrap_or(&empty);
    LanguageCoverage {
        language: language.to_string(),
        lexicon_found: translated.is_some(),
        translated: source.intersection(keys).count(),
        missing: source.difference(keys).cloned().collect(),
        stale: keys.difference(source).cloned().collect(),
    }
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_names: BTreeSet<String> = read_lexicon(&args.source)?.into_keys().collect();
    let source_count = source_names.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{lang}.json"));
        // A missing file means nothing is translated
        let translated: Option<BTreeSet<String>> = if lang_file.exists() {
            Some(read_lexicon(&lang_file)?.into_keys().collect())
        } else {
            None
        };
        coverage_data.push(language_coverage(lang, &source_names, translated.as_ref()));
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                lexicon_found: c.lexicon_found,
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
                stale: c.stale.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{table}");

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!(
                    "\n{} {}:",
                    "Missing in".if_supports_color(Stream::Stdout, |t| t.yellow()),
                    lang_coverage.language
                );
                for name in &lang_coverage.missing {
                    println!("  - {name}");
                }
            }
            if !lang_coverage.stale.is_empty() {
                println!(
                    "\n{} {}:",
                    "Stale in".if_supports_color(Stream::Stdout, |t| t.dimmed()),
                    lang_coverage.language
                );
                for name in &lang_coverage.stale {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
