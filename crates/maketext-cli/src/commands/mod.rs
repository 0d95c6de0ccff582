//! CLI command implementations.

mod check;
mod coverage;
mod eval;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use eval::{EvalArgs, run_eval};

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};

/// Read a JSON lexicon object of `phrase: translation`.
pub(crate) fn read_lexicon(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read lexicon {}", path.display()))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("{} is not a JSON object of strings", path.display()))
}
