//! Bracket-notation localization in the style of Perl's Locale::Maketext,
//! with CLDR-driven number, plural, list, quotation and date formatting.
//!
//! A [`Locale`] translates a phrase through its lexicon and expands
//! bracket groups such as `[_1]`, `[quant,_1,file,files]` or
//! `[datetime,_1,date_format_short]` against positional arguments.

pub mod cldr;
mod format;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use cldr::{CldrBundle, CldrSource};
pub use format::DateFormat;
pub use interpreter::{
    EvalContext, EvalError, FormatterFn, FunctionRegistry, LoadError, Locale, LocaleRegistry,
    PluralChoice, PluralRule, compute_suggestions,
};
pub use types::Value;

// Re-export the translatable! macro
pub use maketext_macros::translatable;

/// Creates a `Vec<Value>` of positional maketext arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, lists or datetimes directly.
///
/// # Example
///
/// ```
/// use maketext::{args, Value};
///
/// let a = args![3, "Alice"];
/// assert_eq!(a.len(), 2);
/// assert_eq!(a[0], Value::Number(3));
/// assert_eq!(a[1].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
