//! Implementation of the `maketext eval` command.

use std::path::PathBuf;

use chrono::FixedOffset;
use maketext::{CldrSource, Locale, Value};
use miette::{IntoDiagnostic, WrapErr};
use serde::Serialize;
use tracing::debug;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Phrase to evaluate (looked up in the lexicon first)
    #[arg(long, required = true)]
    pub template: String,

    /// Language tag of the locale (e.g., en, ru, es_es)
    #[arg(long, default_value = "en")]
    pub tag: String,

    /// CLDR bundle (JSON) to format with
    #[arg(long)]
    pub cldr: Option<PathBuf>,

    /// Lexicon (JSON object of phrase: translation)
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Positional arguments, in order (repeatable)
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,

    /// Fixed zone for local_datetime (e.g., +05:30)
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub utc_offset: Option<FixedOffset>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

fn parse_offset(s: &str) -> Result<FixedOffset, String> {
    s.parse()
        .map_err(|e| format!("invalid UTC offset '{s}': {e}; expected +hh:mm"))
}

/// Integers, then floats, else strings.
fn parse_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    }
}

fn build_locale(args: &EvalArgs) -> miette::Result<Locale> {
    let mut locale = match &args.cldr {
        Some(path) => {
            let source = CldrSource::load(path)
                .into_diagnostic()
                .wrap_err("failed to load CLDR bundle")?;
            debug!(path = %path.display(), tag = %args.tag, "loaded CLDR bundle");
            Locale::from_cldr(args.tag.clone(), source)
        }
        None => Locale::builder().tag(args.tag.clone()).build(),
    };
    if let Some(path) = &args.lexicon {
        let count = locale
            .load_lexicon(path)
            .into_diagnostic()
            .wrap_err("failed to load lexicon")?;
        debug!(path = %path.display(), count, "loaded lexicon");
    }
    locale.set_utc_offset(args.utc_offset);
    Ok(locale)
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let locale = build_locale(&args)?;
    let values: Vec<Value> = args.args.iter().map(|raw| parse_value(raw)).collect();

    match locale.maketext(&args.template, &values) {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output).into_diagnostic()?
                );
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output).into_diagnostic()?
                );
            } else {
                eprintln!("Evaluation error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
