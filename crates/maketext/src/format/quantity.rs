//! Plural-aware quantities: `numerate` and `quant`.

use crate::interpreter::{Locale, PluralChoice};
use crate::types::Value;

/// Fraction digits `quant` keeps unless the count says otherwise.
const QUANT_DECIMAL_PLACES: usize = 3;

impl Locale {
    /// Select the plural form for `count`.
    ///
    /// `forms` are singular, plural and optionally zero without CLDR data,
    /// or one per CLDR category (plus an optional zero form) with it. A
    /// form the rule selects but that was not supplied falls back to the
    /// last form.
    pub fn numerate<S: AsRef<str>>(&self, count: impl Into<Value>, forms: &[S]) -> String {
        let forms = to_strings(forms);
        let count = count.into();
        let (count, _) = scalar_count(&count);
        self.plural_choice(count.as_f64().unwrap_or(f64::NAN), &forms)
            .form
            .unwrap_or_default()
    }

    /// Format `count` with [`Locale::numf`] next to its plural form.
    ///
    /// A form containing `%s` has every `%s` replaced by the number. A
    /// selected extra zero form is returned as is. Otherwise the number and
    /// form are joined by a space, number first unless the locale is right
    /// to left. `count` may be a `[number, decimal places]` list.
    ///
    /// # Example
    ///
    /// ```
    /// use maketext::Locale;
    ///
    /// let locale = Locale::new();
    /// assert_eq!(locale.quant(1, &["file", "files"]), "1 file");
    /// assert_eq!(locale.quant(0, &["file", "files", "no files"]), "no files");
    /// assert_eq!(locale.quant(2, &["%s file", "%s files"]), "2 files");
    /// ```
    pub fn quant<S: AsRef<str>>(&self, count: impl Into<Value>, forms: &[S]) -> String {
        let forms = to_strings(forms);
        let count = count.into();
        let (count, decimal_places) = scalar_count(&count);
        let choice = self.plural_choice(count.as_f64().unwrap_or(f64::NAN), &forms);
        let numerated = choice.form.unwrap_or_default();
        let formatted = self.numf(count, Some(decimal_places.unwrap_or(QUANT_DECIMAL_PLACES)));

        if numerated.contains("%s") {
            return numerated.replace("%s", &formatted);
        }
        if choice.special_zero {
            return numerated;
        }
        if self.is_rtl() {
            format!("{numerated} {formatted}")
        } else {
            format!("{formatted} {numerated}")
        }
    }

    fn plural_choice(&self, count: f64, forms: &[String]) -> PluralChoice {
        let mut choice = match self.plural_rule() {
            Some(rule) => rule.select(count, forms),
            None => english_choice(count, forms),
        };
        if choice.form.is_none() {
            choice.form = forms.last().cloned();
        }
        choice
    }
}

/// Singular for one, the last form for zero, the plural otherwise.
///
/// The last form is a special zero when a third form was supplied and the
/// count truncates to zero.
fn english_choice(count: f64, forms: &[String]) -> PluralChoice {
    let magnitude = count.abs();
    let form = if magnitude == 1.0 {
        forms.first()
    } else if magnitude == 0.0 {
        forms.last()
    } else {
        forms.get(1)
    };
    let special_zero = count.trunc() == 0.0
        && forms.len() > 2
        && form.is_some_and(|form| Some(form) == forms.get(2));
    PluralChoice {
        form: form.cloned(),
        special_zero,
    }
}

/// Unpack a `[number, decimal places]` count.
fn scalar_count(count: &Value) -> (&Value, Option<usize>) {
    match count {
        Value::List(pair) if !pair.is_empty() => {
            (&pair[0], pair.get(1).and_then(Value::as_usize))
        }
        _ => (count, None),
    }
}

fn to_strings<S: AsRef<str>>(forms: &[S]) -> Vec<String> {
    forms.iter().map(|form| form.as_ref().to_string()).collect()
}
