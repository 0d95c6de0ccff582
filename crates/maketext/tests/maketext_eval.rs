//! Integration tests for template expansion, lexicon lookup and errors.

use std::collections::HashMap;
use std::sync::Arc;

use maketext::parser::ParseError;
use maketext::{EvalError, Locale, Value, args, compute_suggestions};

fn shout(_locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(args
        .first()
        .map(|value| value.to_string().to_uppercase())
        .unwrap_or_default())
}

// =============================================================================
// Expansion
// =============================================================================

#[test]
fn test_placeholders() {
    let locale = Locale::new();
    assert_eq!(
        locale.makethis("Hello, [_1]!", &args!["World"]).unwrap(),
        "Hello, World!"
    );
    assert_eq!(
        locale.makethis("[_2] before [_1]", &args!["a", "b"]).unwrap(),
        "b before a"
    );
}

#[test]
fn test_text_without_brackets_is_unchanged() {
    let locale = Locale::new();
    assert_eq!(locale.makethis("100% ~~ ok", &[]).unwrap(), "100% ~~ ok");
    assert_eq!(locale.template_cache_len(), 0);
}

#[test]
fn test_escaped_brackets() {
    let locale = Locale::new();
    assert_eq!(
        locale.makethis("~[_1~] [_1]", &args!["x"]).unwrap(),
        "[_1] x"
    );
}

#[test]
fn test_value_display() {
    let locale = Locale::new();
    let text = locale
        .makethis(
            "[_1] [_2] [_3] [_4] [_5]",
            &args![2.5, vec!["a", "b"], Value::Null, true, 1e21],
        )
        .unwrap();
    assert_eq!(text, "2.5 a,b  true 1e+21");
}

#[test]
fn test_null_placeholder_renders_nothing() {
    let locale = Locale::new();
    assert_eq!(locale.makethis("a[_1]b", &[Value::Null]).unwrap(), "ab");
    assert_eq!(locale.makethis("[_1]", &[Value::Null]).unwrap(), "");
}

#[test]
fn test_text_without_open_bracket_is_returned_unchanged() {
    let locale = Locale::new();
    assert_eq!(locale.makethis("a]", &[]).unwrap(), "a]");
    assert_eq!(locale.maketext("closing ] only", &[]).unwrap(), "closing ] only");
}

#[test]
fn test_spread_argument() {
    let locale = Locale::new();
    assert_eq!(
        locale.makethis("[list_and,_*]", &args!["a", "b", "c"]).unwrap(),
        "a, b, and c"
    );
}

#[test]
fn test_list_argument() {
    let locale = Locale::new();
    assert_eq!(
        locale.makethis("[list_and,_1]", &args![vec!["x", "y"]]).unwrap(),
        "x and y"
    );
}

#[test]
fn test_shorthand_aliases() {
    let locale = Locale::new();
    assert_eq!(
        locale.makethis("[#,_1] [*,_2,file,files]", &args![1234, 1]).unwrap(),
        "1,234 1 file"
    );
}

// =============================================================================
// Lexicon
// =============================================================================

#[test]
fn test_maketext_uses_lexicon() {
    let locale = Locale::builder()
        .tag("es")
        .lexicon(HashMap::from([(
            "Hello, [_1]!".to_string(),
            "¡Hola, [_1]!".to_string(),
        )]))
        .build();
    assert_eq!(
        locale.maketext("Hello, [_1]!", &args!["Ana"]).unwrap(),
        "¡Hola, Ana!"
    );
    assert_eq!(
        locale.makevar("Hello, [_1]!", &args!["Ana"]).unwrap(),
        "¡Hola, Ana!"
    );
    assert_eq!(
        locale.makethis("Hello, [_1]!", &args!["Ana"]).unwrap(),
        "Hello, Ana!"
    );
}

#[test]
fn test_missing_translation_falls_back_to_key() {
    let mut locale = Locale::new();
    locale.insert_translation("Yes", "Sí");
    assert_eq!(locale.maketext("Yes", &[]).unwrap(), "Sí");
    assert_eq!(locale.maketext("No", &[]).unwrap(), "No");
    assert_eq!(locale.translation("Yes"), Some("Sí"));
    assert_eq!(locale.translation("No"), None);
}

#[test]
fn test_load_lexicon_str() {
    let mut locale = Locale::builder().tag("de").build();
    let count = locale
        .load_lexicon_str(r#"{"[_1] file": "[_1] Datei", "Close": "Schließen"}"#)
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(locale.lexicon().len(), 2);
    assert_eq!(locale.maketext("[_1] file", &args![1]).unwrap(), "1 Datei");
}

// =============================================================================
// Template cache
// =============================================================================

#[test]
fn test_parsed_templates_are_cached() {
    let locale = Locale::new();
    locale.makethis("[_1]", &args![1]).unwrap();
    locale.makethis("[_1]", &args![2]).unwrap();
    assert_eq!(locale.template_cache_len(), 1);

    let first = locale.parsed_template("[_1]").unwrap();
    let second = locale.parsed_template("[_1]").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    locale.clear_template_cache();
    assert_eq!(locale.template_cache_len(), 0);
}

#[test]
fn test_makevar_does_not_grow_cache() {
    let locale = Locale::new();
    for n in 0..20 {
        let key = format!("item {n}: [_1]");
        assert_eq!(locale.makevar(&key, &args!["x"]).unwrap(), format!("item {n}: x"));
    }
    assert_eq!(locale.template_cache_len(), 0);

    locale.makethis("[_1]", &args![1]).unwrap();
    assert_eq!(locale.makevar("[_1]", &args![2]).unwrap(), "2");
    assert_eq!(locale.template_cache_len(), 1);
}

#[test]
fn test_clone_starts_with_empty_cache() {
    let locale = Locale::new();
    locale.makethis("[_1]", &args![1]).unwrap();
    let copy = locale.clone();
    assert_eq!(copy.template_cache_len(), 0);
    assert_eq!(copy.makethis("[_1]", &args![1]).unwrap(), "1");
}

// =============================================================================
// Custom functions
// =============================================================================

#[test]
fn test_custom_function() {
    let mut locale = Locale::new();
    locale.functions_mut().register("shout", shout);
    assert!(locale.functions().has_function("shout"));
    assert_eq!(locale.makethis("[shout,_1]!", &args!["hey"]).unwrap(), "HEY!");
}

#[test]
fn test_builtin_can_be_replaced_and_removed() {
    let mut locale = Locale::new();
    locale.functions_mut().register("numf", shout);
    assert_eq!(locale.makethis("[numf,_1]", &args!["abc"]).unwrap(), "ABC");

    assert!(locale.functions_mut().unregister("numf"));
    assert!(!locale.functions_mut().unregister("numf"));
    let err = locale.makethis("[#,_1]", &args![1]).unwrap_err();
    assert!(matches!(err, EvalError::UnknownFunction { name, .. } if name == "numf"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_argument() {
    let locale = Locale::new();
    let err = locale.makethis("[_3]", &args!["a"]).unwrap_err();
    assert!(matches!(err, EvalError::MissingArgument { index: 3, .. }));
    assert_eq!(err.to_string(), "missing argument _3 in '[_3]'");
}

#[test]
fn test_argument_zero_is_missing() {
    let locale = Locale::new();
    let err = locale.makethis("[_0]", &args!["a"]).unwrap_err();
    assert!(matches!(err, EvalError::MissingArgument { index: 0, .. }));
}

#[test]
fn test_missing_argument_inside_call() {
    let locale = Locale::new();
    let err = locale.makethis("[quant,_2,a,b]", &args![1]).unwrap_err();
    assert!(matches!(err, EvalError::MissingArgument { index: 2, .. }));
}

#[test]
fn test_syntax_error() {
    let locale = Locale::new();
    let err = locale.makethis("[_1", &args![1]).unwrap_err();
    match &err {
        EvalError::Syntax { template, source } => {
            assert_eq!(template, "[_1");
            assert_eq!(*source, ParseError::UnclosedGroup { offset: 0 });
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "invalid maketext string '[_1': unclosed '[' at byte 0"
    );
}

#[test]
fn test_unknown_function_suggests_builtins() {
    let locale = Locale::new();
    let err = locale.makethis("[qaunt,_1,a,b]", &args![1]).unwrap_err();
    match &err {
        EvalError::UnknownFunction {
            name, suggestions, ..
        } => {
            assert_eq!(name, "qaunt");
            assert!(suggestions.contains(&"quant".to_string()));
        }
        other => panic!("expected unknown function, got {other:?}"),
    }
    assert!(err.to_string().contains("did you mean: quant"));
}

#[test]
fn test_unknown_function_without_suggestions() {
    let locale = Locale::new();
    let err = locale.makethis("[frobnicate,_1]", &args![1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown function 'frobnicate' in '[frobnicate,_1]'"
    );
}

#[test]
fn test_compute_suggestions() {
    let names = ["numf", "numerate", "quant", "list", "join"];
    assert_eq!(compute_suggestions("nmuf", names), vec!["numf"]);
    assert_eq!(compute_suggestions("lst", names), vec!["list"]);
    assert!(compute_suggestions("xyzzy", names).is_empty());
}

#[test]
fn test_error_message_catalogue() {
    let locale = Locale::new();
    let templates = [
        "[_1",
        "[_1]]",
        "[[_1]]",
        "x[]",
        "[foo]",
        "[numf,_x]",
        "[_2]",
        "[qaunt,_1]",
        "[output,class,foo][_1][/output]",
    ];
    let messages: Vec<String> = templates
        .iter()
        .map(|template| locale.makethis(template, &args!["a"]).unwrap_err().to_string())
        .collect();
    insta::assert_snapshot!(messages.join("\n"), @r"
    invalid maketext string '[_1': unclosed '[' at byte 0
    invalid maketext string '[_1]]': unmatched ']' at byte 4
    invalid maketext string '[[_1]]': nested '[' at byte 1
    invalid maketext string 'x[]': empty bracket group at byte 1
    invalid maketext string '[foo]': invalid placeholder '[foo]' at byte 0
    invalid maketext string '[numf,_x]': invalid argument reference '_x' at byte 0
    missing argument _2 in '[_2]'
    unknown function 'qaunt' in '[qaunt,_1]', did you mean: quant?
    invalid maketext string '[output,class,foo][_1][/output]': invalid placeholder '[/output]' at byte 22
    ");
}

#[test]
fn test_unknown_function_raises_instead_of_partial_output() {
    let locale = Locale::new();
    let err = locale.makethis("[output,class,foo] [_1]", &args!["a"]).unwrap_err();
    assert!(matches!(err, EvalError::UnknownFunction { name, .. } if name == "output"));
}
