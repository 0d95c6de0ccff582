//! Locale-aware formatters behind the built-in bracket functions.
//!
//! Each submodule adds an `impl Locale` block. Formatters read the
//! locale's CLDR tables when present and fall back to English otherwise.

mod bytes;
mod datetime;
mod elide;
mod list;
mod numeric;
mod quantity;

pub use datetime::DateFormat;

/// Substitute `{0}` and `{1}` in a CLDR pattern in a single pass, so that
/// braces inside the substituted text are left alone.
pub(crate) fn fill_pattern(pattern: &str, first: &str, second: &str) -> String {
    let mut output = String::with_capacity(pattern.len() + first.len() + second.len());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{0}") {
            output.push_str(first);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{1}") {
            output.push_str(second);
            rest = after;
        } else {
            output.push('{');
            rest = &tail[1..];
        }
    }
    output.push_str(rest);
    output
}
