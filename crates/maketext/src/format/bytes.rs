//! Human-readable byte counts.

use crate::interpreter::{EvalError, Locale};

/// Binary unit abbreviations for 1024^1 through 1024^8.
const DATA_ABBREVIATIONS: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Phrase used below one kilobyte. The spaces are non-breaking; the phrase
/// goes through the lexicon so that translations apply.
const BYTES_PHRASE: &str = "[quant,_1,%s\u{a0}byte,%s\u{a0}bytes]";

const BYTES_DECIMAL_PLACES: usize = 2;

impl Locale {
    /// Format a byte count with binary units.
    ///
    /// Counts under 1024 (and non-positive or non-numeric counts) are
    /// spelled out with a pluralized "byte"; larger counts are divided down
    /// to at most `YB` and formatted with [`Locale::numf`] at
    /// `decimal_places` (default 2).
    ///
    /// # Example
    ///
    /// ```
    /// use maketext::Locale;
    ///
    /// let locale = Locale::new();
    /// assert_eq!(locale.format_bytes(2048.0, None).unwrap(), "2\u{a0}KB");
    /// assert_eq!(locale.format_bytes(1.0, None).unwrap(), "1\u{a0}byte");
    /// ```
    pub fn format_bytes(&self, bytes: f64, decimal_places: Option<usize>) -> Result<String, EvalError> {
        let decimal_places = decimal_places.unwrap_or(BYTES_DECIMAL_PLACES);
        let exponent = if bytes > 0.0 {
            (bytes.ln() / 1024_f64.ln())
                .floor()
                .min(DATA_ABBREVIATIONS.len() as f64)
        } else {
            0.0
        };
        if exponent < 1.0 {
            return self.maketext(BYTES_PHRASE, &[bytes.into()]);
        }
        let scaled = bytes / 1024_f64.powf(exponent);
        let unit = DATA_ABBREVIATIONS[exponent as usize - 1];
        Ok(format!("{}\u{a0}{unit}", self.numf(scaled, Some(decimal_places))))
    }
}
