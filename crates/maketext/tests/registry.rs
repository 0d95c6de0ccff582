//! Integration tests for the locale registry.

mod common;

use std::sync::Arc;

use maketext::{Locale, LocaleRegistry, args};

fn tagged(tag: &str) -> Locale {
    Locale::builder().tag(tag).build()
}

#[test]
fn register_makes_locale_current() {
    let mut registry = LocaleRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.current().is_none());

    registry.register("en", tagged("en"));
    registry.register("fr", tagged("fr"));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.current_tag(), Some("fr"));
    assert_eq!(registry.current().unwrap().tag(), "fr");
    assert!(registry.has_locale("en"));
    assert!(!registry.has_locale("de"));
}

#[test]
fn reregistering_keeps_order() {
    let mut registry = LocaleRegistry::new();
    registry.register("en", tagged("en"));
    registry.register("fr", tagged("fr"));
    let replaced = registry.register("en", Locale::builder().tag("en").list_default_and("and").build());
    assert_eq!(registry.tags(), ["en", "fr"]);
    assert_eq!(replaced.list_default_and(), "and");
    assert_eq!(registry.current_tag(), Some("en"));
}

#[test]
fn get_handle_preference_order() {
    let mut registry = LocaleRegistry::new();
    registry.register("en", tagged("en"));
    registry.register("ru", tagged("ru"));

    assert_eq!(registry.get_handle(&["fr", "ru", "en"]).tag(), "ru");
    assert_eq!(registry.get_handle(&["xx"]).tag(), "en");
    assert_eq!(registry.get_handle(&[]).tag(), "en");
}

#[test]
fn get_handle_on_empty_registry_is_bare_english() {
    let registry = LocaleRegistry::new();
    let handle = registry.get_handle(&["de"]);
    assert_eq!(handle.tag(), "en");
    assert!(handle.get_cldr().is_none());
    assert_eq!(
        handle.maketext("[quant,_1,file,files]", &args![2]).unwrap(),
        "2 files"
    );
}

#[test]
fn set_current_requires_registration() {
    let mut registry = LocaleRegistry::new();
    registry.register("en", tagged("en"));
    registry.register("fr", tagged("fr"));

    assert_eq!(registry.set_current("en").unwrap().tag(), "en");
    assert_eq!(registry.current_tag(), Some("en"));

    assert!(registry.set_current("de").is_none());
    assert_eq!(registry.current_tag(), Some("en"));
}

#[test]
fn remove_and_clear() {
    let mut registry = LocaleRegistry::new();
    registry.register("en", tagged("en"));
    registry.register("fr", tagged("fr"));

    assert!(registry.remove("fr"));
    assert!(!registry.remove("fr"));
    assert_eq!(registry.tags(), ["en"]);
    assert_eq!(registry.current_tag(), None);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.get("en").is_none());
}

#[test]
fn generate_from_cldr_installs_plural_rule() {
    let mut registry = LocaleRegistry::new();
    let ru = registry.generate_from_cldr("ru", common::ru_source());
    assert!(ru.plural_rule().is_some());
    assert_eq!(ru.quant(5, &["файл", "файла", "файлов", "файла"]), "5 файлов");
    assert_eq!(registry.current_tag(), Some("ru"));
}

#[test]
fn locale_mut_leaves_existing_handles_alone() {
    let mut registry = LocaleRegistry::new();
    let before = registry.register("en", tagged("en"));

    registry
        .locale_mut("en")
        .unwrap()
        .insert_translation("Hello", "Howdy");

    assert_eq!(before.maketext("Hello", &[]).unwrap(), "Hello");
    let after = registry.get("en").unwrap();
    assert_eq!(after.maketext("Hello", &[]).unwrap(), "Howdy");
    assert!(!Arc::ptr_eq(&before, &after));
}
