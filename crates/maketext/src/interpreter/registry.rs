//! Registry of locales by language tag.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cldr::CldrSource;
use crate::interpreter::Locale;

/// Locales keyed by language tag, with a current locale.
///
/// Registration order is remembered: when none of the requested tags is
/// registered, [`LocaleRegistry::get_handle`] falls back to the first
/// registered locale, and then to a bare English locale.
///
/// Handles are shared `Arc<Locale>`s. Mutating a registered locale through
/// [`LocaleRegistry::locale_mut`] leaves handles already given out on the
/// previous state.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    locales: HashMap<String, Arc<Locale>>,
    order: Vec<String>,
    current: Option<String>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locale under `tag` and make it current.
    ///
    /// Re-registering a tag replaces the locale but keeps its position.
    pub fn register(&mut self, tag: impl Into<String>, locale: Locale) -> Arc<Locale> {
        let tag = tag.into();
        let handle = Arc::new(locale);
        if self
            .locales
            .insert(tag.clone(), Arc::clone(&handle))
            .is_none()
        {
            self.order.push(tag.clone());
        }
        debug!(tag = %tag, "registered locale");
        self.current = Some(tag);
        handle
    }

    /// Build a locale from CLDR data and register it.
    pub fn generate_from_cldr(&mut self, tag: &str, source: CldrSource) -> Arc<Locale> {
        self.register(tag, Locale::from_cldr(tag, source))
    }

    /// Unregister a locale. Returns whether it was registered.
    pub fn remove(&mut self, tag: &str) -> bool {
        if self.locales.remove(tag).is_none() {
            return false;
        }
        self.order.retain(|t| t != tag);
        if self.current.as_deref() == Some(tag) {
            self.current = None;
        }
        debug!(tag, "removed locale");
        true
    }

    /// Unregister every locale.
    pub fn clear(&mut self) {
        self.locales.clear();
        self.order.clear();
        self.current = None;
    }

    pub fn has_locale(&self, tag: &str) -> bool {
        self.locales.contains_key(tag)
    }

    pub fn get(&self, tag: &str) -> Option<Arc<Locale>> {
        self.locales.get(tag).cloned()
    }

    /// Mutable access to a registered locale, for configuration.
    pub fn locale_mut(&mut self, tag: &str) -> Option<&mut Locale> {
        self.locales.get_mut(tag).map(Arc::make_mut)
    }

    /// Registered tags, in registration order.
    pub fn tags(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The tag of the most recently registered or selected locale.
    pub fn current_tag(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The current locale, if one is set.
    pub fn current(&self) -> Option<Arc<Locale>> {
        self.current.as_deref().and_then(|tag| self.get(tag))
    }

    /// Make a registered locale current. Returns it, or `None` when the tag
    /// is not registered.
    pub fn set_current(&mut self, tag: &str) -> Option<Arc<Locale>> {
        let Some(locale) = self.get(tag) else {
            warn!(tag, "cannot select unregistered locale; keeping current selection");
            return None;
        };
        debug!(tag, "selected locale");
        self.current = Some(tag.to_string());
        Some(locale)
    }

    /// The first registered locale among `preferences`, else the first
    /// registered locale, else a bare English locale.
    pub fn get_handle(&self, preferences: &[&str]) -> Arc<Locale> {
        preferences
            .iter()
            .find_map(|tag| self.get(tag))
            .or_else(|| self.order.first().and_then(|tag| self.get(tag)))
            .unwrap_or_else(|| Arc::new(Locale::new()))
    }
}
