//! Text elision with CLDR ellipsis patterns.

use unicode_segmentation::UnicodeSegmentation;

use crate::cldr::english;
use crate::format::fill_pattern;
use crate::interpreter::Locale;

impl Locale {
    /// Shorten text to its first `start_length` and last `end_length`
    /// characters, joined by the locale's ellipsis.
    ///
    /// Lengths count user-perceived characters. Text that already fits is
    /// returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use maketext::Locale;
    ///
    /// let locale = Locale::new();
    /// assert_eq!(locale.elide("abcdefgh", 2, 2), "ab…gh");
    /// assert_eq!(locale.elide("abcdefgh", 3, 0), "abc…");
    /// assert_eq!(locale.elide("abc", 2, 2), "abc");
    /// ```
    pub fn elide(&self, text: &str, start_length: usize, end_length: usize) -> String {
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        if graphemes.len() <= start_length.saturating_add(end_length) {
            return text.to_string();
        }
        let head = graphemes[..start_length].concat();
        let tail = graphemes[graphemes.len() - end_length..].concat();

        let templates = self
            .cldr_formats()
            .and_then(|formats| formats.ellipsis.as_ref());
        match (start_length > 0, end_length > 0) {
            (true, true) => {
                let medial = templates
                    .and_then(|t| t.medial.as_deref())
                    .unwrap_or(english::ELLIPSIS_MEDIAL);
                fill_pattern(medial, &head, &tail)
            }
            (true, false) => {
                let trailing = templates
                    .and_then(|t| t.r#final.as_deref())
                    .unwrap_or(english::ELLIPSIS_FINAL);
                fill_pattern(trailing, &head, "")
            }
            (false, true) => {
                let initial = templates
                    .and_then(|t| t.initial.as_deref())
                    .unwrap_or(english::ELLIPSIS_INITIAL);
                fill_pattern(initial, &tail, "")
            }
            (false, false) => String::new(),
        }
    }
}
