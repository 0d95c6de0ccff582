//! Lexicon coverage tables.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets};

/// How one language's lexicon compares with the source lexicon.
pub struct LanguageCoverage {
    /// Language tag (e.g., "es", "fr").
    pub language: String,
    /// Whether `<language>.json` exists.
    pub lexicon_found: bool,
    /// Source phrases the lexicon translates.
    pub translated: usize,
    /// Source phrases with no translation.
    pub missing: Vec<String>,
    /// Lexicon keys that are no longer source phrases.
    pub stale: Vec<String>,
}

impl LanguageCoverage {
    /// Translated share of the source phrases, in whole percent.
    ///
    /// An empty source lexicon counts as fully covered.
    pub fn percent(&self, source_count: usize) -> usize {
        if source_count == 0 {
            return 100;
        }
        self.translated.saturating_mul(100).div_euclid(source_count)
    }
}

/// One row per language: coverage, missing and stale phrase counts.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Lexicon", "Translated", "Missing", "Stale"]);

    for lang in coverage {
        let lexicon = if lang.lexicon_found { "found" } else { "absent" };
        table.add_row(vec![
            Cell::new(&lang.language),
            Cell::new(lexicon),
            Cell::new(format!(
                "{}/{} ({}%)",
                lang.translated,
                source_count,
                lang.percent(source_count)
            ))
            .set_alignment(CellAlignment::Right),
            Cell::new(lang.missing.len()).set_alignment(CellAlignment::Right),
            Cell::new(lang.stale.len()).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
