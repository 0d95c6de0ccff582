//! Compile-time validation for the translatable! macro.
//!
//! Scans the phrase with the same lexical rules as the runtime parser:
//! `~` escapes, one level of brackets, `~,` inside a group. Also checks that
//! every function is a built-in or was named in the macro input, with typo
//! suggestions using Levenshtein distance.

use maketext_semantics::{
    ESCAPE_CHAR, ESCAPED_COMMA, FieldKind, builtin_function_names, classify_field,
    parse_positional, resolve_function,
};
use strsim::levenshtein;

use crate::input::MacroInput;

/// Validate the phrase of a macro invocation.
pub fn validate(input: &MacroInput) -> syn::Result<()> {
    let extra: Vec<String> = input.functions.iter().map(ToString::to_string).collect();
    check_phrase(&input.phrase.value(), &extra)
        .map_err(|message| syn::Error::new(input.phrase.span(), message))
}

/// Check a phrase, returning the first problem as a message.
pub fn check_phrase(phrase: &str, extra_functions: &[String]) -> Result<(), String> {
    let mut group: Option<String> = None;
    let mut chars = phrase.chars();
    while let Some(c) = chars.next() {
        match (c, &mut group) {
            (ESCAPE_CHAR, Some(body)) => match chars.next() {
                Some(',') => body.push(ESCAPED_COMMA),
                Some(escaped) => body.push(escaped),
                None => body.push(ESCAPE_CHAR),
            },
            (ESCAPE_CHAR, None) => {
                chars.next();
            }
            ('[', Some(_)) => return Err("nested '[' in bracket group".to_string()),
            ('[', None) => group = Some(String::new()),
            (']', Some(body)) => {
                check_group(body, extra_functions)?;
                group = None;
            }
            (']', None) => return Err("unmatched ']'".to_string()),
            (other, Some(body)) => body.push(other),
            (_, None) => {}
        }
    }
    if group.is_some() {
        return Err("unclosed '[' bracket group".to_string());
    }
    Ok(())
}

fn check_group(body: &str, extra_functions: &[String]) -> Result<(), String> {
    if body.is_empty() {
        return Err("empty bracket group '[]'".to_string());
    }
    let mut fields = body.split(',');
    let name = fields.next().unwrap_or_default();
    let args: Vec<&str> = fields.collect();

    if args.is_empty() {
        if parse_positional(name).is_none() {
            return Err(format!(
                "'[{}]' is not a placeholder; use [_N] or [function,...]",
                name.replace(ESCAPED_COMMA, ",")
            ));
        }
        return Ok(());
    }

    for arg in &args {
        if classify_field(arg) == FieldKind::Malformed {
            return Err(format!(
                "invalid argument reference '{arg}'; use _N or _*"
            ));
        }
    }

    if resolve_function(name).is_none() && !extra_functions.iter().any(|f| f == name) {
        let mut candidates = builtin_function_names();
        candidates.extend(extra_functions.iter().map(String::as_str));
        let suggestions = compute_suggestions(name, &candidates);
        return Err(if suggestions.is_empty() {
            format!("unknown function '{name}'")
        } else {
            format!(
                "unknown function '{name}', did you mean: {}?",
                suggestions.join(", ")
            )
        });
    }
    Ok(())
}

/// Compute typo suggestions from a slice of names.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - Limit to 3 suggestions, sorted by distance
fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
