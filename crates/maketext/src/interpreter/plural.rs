//! CLDR plural category resolution and plural form selection.
//!
//! A [`PluralRule`] picks one of the translator-supplied forms for a count.
//! Locales generated from CLDR data use [`PluralRule::cldr`], which resolves
//! the count's category with ICU4X and maps it onto the supplied forms in
//! the locale's category order. Translators may append one extra form after
//! the last category; it is used for exactly zero and flagged as a special
//! zero so that `quant` can output it without the number.
//!
//! Plural rules are cached per thread per language tag to avoid re-creating
//! `PluralRules` instances on every call.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use fixed_decimal::Decimal;
use icu_locale_core::Locale as IcuLocale;
use icu_plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};
use tracing::warn;

/// Plural categories in CLDR canonical order.
const CATEGORY_ORDER: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language tag. `None` marks
    /// a tag ICU4X could not resolve.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, Option<PluralRules>)>> = const { RefCell::new(Vec::new()) };
}

/// The outcome of plural form selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluralChoice {
    /// The selected form, or `None` when no form was supplied for it.
    pub form: Option<String>,
    /// Set when the selected form is the extra zero form.
    pub special_zero: bool,
}

type PluralRuleFn = dyn Fn(f64, &[String]) -> PluralChoice + Send + Sync;

/// A plural form selection function attached to a locale.
#[derive(Clone)]
pub struct PluralRule(Arc<PluralRuleFn>);

impl PluralRule {
    /// A rule backed by the CLDR plural rules for `tag`.
    ///
    /// `categories` is the locale's category list from its CLDR bundle. When
    /// empty, the categories ICU4X reports for the tag are used.
    pub fn cldr(tag: impl Into<String>, categories: Vec<String>) -> Self {
        let tag = tag.into();
        let categories = if categories.is_empty() {
            plural_categories(&tag)
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            categories
        };
        Self::custom(move |n, forms| {
            let category = plural_category(&tag, n).unwrap_or("other");
            select_form(&categories, category, n, forms)
        })
    }

    /// A rule implemented by an arbitrary function.
    pub fn custom(rule: impl Fn(f64, &[String]) -> PluralChoice + Send + Sync + 'static) -> Self {
        Self(Arc::new(rule))
    }

    /// Select a form for `n`.
    pub fn select(&self, n: f64, forms: &[String]) -> PluralChoice {
        (self.0)(n, forms)
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PluralRule(..)")
    }
}

/// Map a category onto the supplied forms.
///
/// Forms are given in `categories` order, optionally followed by one extra
/// form for zero. With no forms at all, the category names themselves are
/// the forms.
fn select_form(categories: &[String], category: &str, n: f64, forms: &[String]) -> PluralChoice {
    let forms = if forms.is_empty() { categories } else { forms };
    let has_extra_for_zero = forms.len() == categories.len() + 1;
    if !has_extra_for_zero && forms.len() != categories.len() {
        warn!(
            given = forms.len(),
            expected = categories.len(),
            "number of plural forms does not match the number of categories"
        );
    }
    let is_zero = n.abs() == 0.0;

    let position = if category == "other" {
        None
    } else {
        let found = categories.iter().position(|c| c == category);
        if found.is_none() {
            warn!(category, "plural category is not used by this locale");
        }
        found
    };

    match position {
        Some(index) => PluralChoice {
            form: forms.get(index).cloned(),
            special_zero: false,
        },
        None => {
            let from_end = if has_extra_for_zero && !is_zero { 2 } else { 1 };
            PluralChoice {
                form: forms
                    .len()
                    .checked_sub(from_end)
                    .and_then(|i| forms.get(i))
                    .cloned(),
                special_zero: has_extra_for_zero && is_zero,
            }
        }
    }
}

fn build_rules(tag: &str) -> Option<PluralRules> {
    let locale: IcuLocale = tag.replace('_', "-").parse().ok()?;
    PluralRules::try_new(locale.into(), PluralRuleType::Cardinal.into()).ok()
}

fn with_rules<T>(tag: &str, f: impl FnOnce(&PluralRules) -> T) -> Option<T> {
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(cached, _)| cached == tag) {
            return rules.as_ref().map(f);
        }
        let rules = build_rules(tag);
        let result = rules.as_ref().map(f);
        cache.push((tag.to_string(), rules));
        result
    })
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

fn operands(n: f64) -> PluralOperands {
    let magnitude = n.abs();
    if magnitude.fract() == 0.0 && magnitude < 1e15 {
        return PluralOperands::from(magnitude as i64);
    }
    // f64 Display never uses exponent notation, so this is a plain decimal.
    Decimal::try_from_str(&magnitude.to_string())
        .map_or_else(|_| PluralOperands::from(0_i64), |decimal| PluralOperands::from(&decimal))
}

/// Get the CLDR plural category of `n` for a language tag.
///
/// Returns `None` when ICU4X has no rules for the tag.
///
/// # Examples
///
/// ```
/// use maketext::interpreter::plural_category;
///
/// assert_eq!(plural_category("en", 1.0), Some("one"));
/// assert_eq!(plural_category("ru", 3.0), Some("few"));
/// assert_eq!(plural_category("ru", 5.0), Some("many"));
/// ```
pub fn plural_category(tag: &str, n: f64) -> Option<&'static str> {
    with_rules(tag, |rules| category_str(rules.category_for(operands(n))))
}

/// The plural categories a language tag uses, in CLDR canonical order.
///
/// Falls back to `["one", "other"]` when ICU4X has no rules for the tag.
pub fn plural_categories(tag: &str) -> Vec<&'static str> {
    let mut categories = with_rules(tag, |rules| {
        rules.categories().map(category_str).collect::<Vec<_>>()
    })
    .unwrap_or_else(|| vec!["one", "other"]);
    categories.sort_by_key(|category| CATEGORY_ORDER.iter().position(|c| c == category));
    categories
}
