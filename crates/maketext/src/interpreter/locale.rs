//! Locale: the lexicon, formatting configuration and CLDR data for one
//! language tag, and the maketext entry points.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use bon::Builder;
use chrono::FixedOffset;
use tracing::debug;

use crate::cldr::{CldrBundle, CldrFormats, CldrSource, DatetimeInfo, MiscInfo};
use crate::interpreter::{EvalContext, EvalError, FunctionRegistry, LoadError, PluralRule, eval_template};
use crate::parser::{Template, parse_template};
use crate::types::Value;

/// A localization handle for one language tag.
///
/// Construct with [`Locale::builder`], or from generated CLDR data with
/// [`Locale::from_cldr`].
///
/// # Example
///
/// ```
/// use maketext::{Locale, args};
///
/// let locale = Locale::builder().tag("en").build();
/// let text = locale.maketext("You have [quant,_1,file,files].", &args![3]).unwrap();
/// assert_eq!(text, "You have 3 files.");
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Locale {
    /// Language tag, like `en` or `es_es`.
    #[builder(default = "en".to_string())]
    tag: String,

    /// Translations keyed by source phrase.
    #[builder(default)]
    lexicon: HashMap<String, String>,

    /// Plural form selection. Without one, English rules apply.
    plural_rule: Option<PluralRule>,

    /// CLDR data tables. Without them, English formats apply.
    cldr: Option<CldrBundle>,

    /// Separator between all but the last two items of `list`.
    #[builder(default = ", ".to_string())]
    list_separator: String,

    /// Separator before the conjunction of a `list` of three or more.
    #[builder(default = ",".to_string())]
    oxford_separator: String,

    /// Conjunction `list` uses when none is given.
    #[builder(default = "&".to_string())]
    list_default_and: String,

    /// Fraction digits `numf` keeps when none are requested.
    #[builder(default = 6)]
    max_decimal_places: usize,

    /// Bracket functions available to templates.
    #[builder(default)]
    functions: FunctionRegistry,

    /// Zone for `local_datetime`. Without one, the system zone applies.
    utc_offset: Option<FixedOffset>,

    /// Parsed templates keyed by their source text.
    #[builder(skip)]
    template_cache: RwLock<HashMap<String, Arc<Template>>>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Clone for Locale {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            lexicon: self.lexicon.clone(),
            plural_rule: self.plural_rule.clone(),
            cldr: self.cldr.clone(),
            list_separator: self.list_separator.clone(),
            oxford_separator: self.oxford_separator.clone(),
            list_default_and: self.list_default_and.clone(),
            max_decimal_places: self.max_decimal_places,
            functions: self.functions.clone(),
            utc_offset: self.utc_offset,
            template_cache: RwLock::default(),
        }
    }
}

impl Locale {
    /// A bare English locale: no lexicon, no CLDR data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a locale from generated CLDR data.
    ///
    /// The plural rule follows the tag's CLDR rules, with forms mapped in the
    /// order of the bundle's plural category list.
    pub fn from_cldr(tag: impl Into<String>, source: CldrSource) -> Self {
        let tag = tag.into();
        let categories = source
            .misc_info
            .as_ref()
            .and_then(|misc| misc.plural_forms.as_ref())
            .map(|forms| forms.category_list.clone())
            .unwrap_or_default();
        Self::builder()
            .plural_rule(PluralRule::cldr(tag.clone(), categories))
            .cldr(source.into_bundle())
            .tag(tag)
            .build()
    }

    // =========================================================================
    // Maketext
    // =========================================================================

    /// Translate `key` through the lexicon, then expand it with `args`.
    ///
    /// Keys without a lexicon entry are used as the template themselves.
    pub fn maketext(&self, key: &str, args: &[Value]) -> Result<String, EvalError> {
        let template = self.lexicon.get(key).map_or(key, String::as_str);
        self.makethis(template, args)
    }

    /// Expand a template with `args`, bypassing the lexicon.
    ///
    /// Text containing no `[` is returned unchanged.
    pub fn makethis(&self, template: &str, args: &[Value]) -> Result<String, EvalError> {
        if !template.contains('[') {
            return Ok(template.to_string());
        }
        let parsed = self.parsed_template(template)?;
        eval_template(&parsed, &EvalContext::new(template, args), self)
    }

    /// [`Locale::maketext`] for keys held in variables, which phrase
    /// harvesters do not extract.
    ///
    /// Keys here are often built at runtime, so their parses are not added
    /// to the template cache.
    pub fn makevar(&self, key: &str, args: &[Value]) -> Result<String, EvalError> {
        let template = self.lexicon.get(key).map_or(key, String::as_str);
        if !template.contains('[') {
            return Ok(template.to_string());
        }
        let parsed = match self.cached_template(template) {
            Some(cached) => cached,
            None => Arc::new(self.parse_uncached(template)?),
        };
        eval_template(&parsed, &EvalContext::new(template, args), self)
    }

    /// Parse `template`, reusing an earlier parse of the same text.
    pub fn parsed_template(&self, template: &str) -> Result<Arc<Template>, EvalError> {
        if let Some(cached) = self.cached_template(template) {
            return Ok(cached);
        }

        let parsed = Arc::new(self.parse_uncached(template)?);
        self.template_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(template.to_string(), Arc::clone(&parsed));
        Ok(parsed)
    }

    fn cached_template(&self, template: &str) -> Option<Arc<Template>> {
        self.template_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(template)
            .map(Arc::clone)
    }

    fn parse_uncached(&self, template: &str) -> Result<Template, EvalError> {
        let parsed = parse_template(template).map_err(|source| EvalError::Syntax {
            template: template.to_string(),
            source,
        })?;
        debug!(tag = %self.tag, template, "parsed maketext template");
        Ok(parsed)
    }

    /// Number of parsed templates held in the cache.
    pub fn template_cache_len(&self) -> usize {
        self.template_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn clear_template_cache(&self) {
        self.template_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    // =========================================================================
    // Lexicon
    // =========================================================================

    /// Add or replace one translation.
    pub fn insert_translation(&mut self, key: impl Into<String>, translation: impl Into<String>) {
        self.lexicon.insert(key.into(), translation.into());
    }

    pub fn translation(&self, key: &str) -> Option<&str> {
        self.lexicon.get(key).map(String::as_str)
    }

    pub fn lexicon(&self) -> &HashMap<String, String> {
        &self.lexicon
    }

    /// Merge translations from a JSON object of `source phrase: translation`.
    ///
    /// Returns the number of entries loaded.
    pub fn load_lexicon_str(&mut self, json: &str) -> Result<usize, LoadError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| LoadError::Json {
                path: format!("<{}>", self.tag).into(),
                source,
            })?;
        Ok(self.extend_lexicon(entries))
    }

    /// Merge translations from a JSON file.
    pub fn load_lexicon(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.extend_lexicon(entries))
    }

    fn extend_lexicon(&mut self, entries: HashMap<String, String>) -> usize {
        let count = entries.len();
        self.lexicon.extend(entries);
        debug!(tag = %self.tag, count, "loaded lexicon entries");
        count
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The language tag this locale was built for.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn plural_rule(&self) -> Option<&PluralRule> {
        self.plural_rule.as_ref()
    }

    pub fn list_separator(&self) -> &str {
        &self.list_separator
    }

    pub fn oxford_separator(&self) -> &str {
        &self.oxford_separator
    }

    pub fn list_default_and(&self) -> &str {
        &self.list_default_and
    }

    pub fn max_decimal_places(&self) -> usize {
        self.max_decimal_places
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
    }

    /// Pin `local_datetime` to a fixed zone, or `None` for the system zone.
    pub fn set_utc_offset(&mut self, offset: Option<FixedOffset>) {
        self.utc_offset = offset;
    }

    /// The function registry, for registering custom bracket functions.
    pub fn functions_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.functions
    }

    // =========================================================================
    // CLDR data
    // =========================================================================

    /// The locale's CLDR data, if any.
    pub fn get_cldr(&self) -> Option<&CldrBundle> {
        self.cldr.as_ref()
    }

    /// Overlay CLDR tables. Tables present in `partial` replace the current
    /// ones; absent tables are kept.
    pub fn set_cldr(&mut self, partial: CldrBundle) {
        match &mut self.cldr {
            Some(current) => current.merge(partial),
            None => self.cldr = Some(partial),
        }
    }

    /// Drop all CLDR data, reverting to English formats.
    pub fn reset_cldr(&mut self) {
        self.cldr = None;
    }

    pub fn datetime_info(&self) -> Option<&DatetimeInfo> {
        self.cldr.as_ref()?.datetime.as_ref()
    }

    pub fn misc_info(&self) -> Option<&MiscInfo> {
        self.cldr.as_ref()?.misc_info.as_ref()
    }

    pub(crate) fn cldr_formats(&self) -> Option<&CldrFormats> {
        self.misc_info()?.cldr_formats.as_ref()
    }

    /// Whether the locale's script runs right to left.
    pub fn is_rtl(&self) -> bool {
        self.misc_info()
            .and_then(|misc| misc.orientation.as_ref())
            .and_then(|orientation| orientation.characters.as_deref())
            == Some("right-to-left")
    }
}
