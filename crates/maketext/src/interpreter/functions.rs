//! Bracket function registry.
//!
//! Every `[name,arg,...]` group in a template is dispatched to a
//! [`FormatterFn`] looked up by name in the locale's [`FunctionRegistry`].
//! The registry starts with the built-in functions; applications may
//! register their own or replace built-ins.

use std::collections::BTreeMap;

use maketext_semantics::FunctionId;

use crate::format::DateFormat;
use crate::interpreter::{EvalError, Locale};
use crate::types::Value;

/// Bracket function signature.
///
/// Takes the locale the template is evaluated in and the resolved group
/// arguments (after the function name), and returns the replacement text.
pub type FormatterFn = fn(&Locale, &[Value]) -> Result<String, EvalError>;

/// Registry of bracket functions by name.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, FormatterFn>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl FunctionRegistry {
    /// Create a registry with no functions.
    pub fn empty() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in function.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for id in FunctionId::ALL {
            registry.register(id.name(), builtin(*id));
        }
        registry
    }

    /// Register a function, replacing any previous one of the same name.
    pub fn register(&mut self, name: impl Into<String>, function: FormatterFn) {
        self.functions.insert(name.into(), function);
    }

    /// Remove a function. Returns whether it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<FormatterFn> {
        self.functions.get(name).copied()
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

fn builtin(id: FunctionId) -> FormatterFn {
    match id {
        FunctionId::Numf => numf,
        FunctionId::Numerate => numerate,
        FunctionId::Quant => quant,
        FunctionId::List => list,
        FunctionId::ListAnd => list_and,
        FunctionId::ListOr => list_or,
        FunctionId::ListAndQuoted => list_and_quoted,
        FunctionId::ListOrQuoted => list_or_quoted,
        FunctionId::Datetime => datetime,
        FunctionId::LocalDatetime => local_datetime,
        FunctionId::Elide => elide,
        FunctionId::Join => join,
        FunctionId::Boolean => boolean,
        FunctionId::Comment => comment,
        FunctionId::Asis => asis,
        FunctionId::FormatBytes => format_bytes,
        FunctionId::Quote => quote,
        FunctionId::AltQuote => alt_quote,
        FunctionId::QuoteListAnd => quote_list_and,
        FunctionId::AltQuoteListAnd => alt_quote_list_and,
    }
}

// =============================================================================
// Argument helpers
// =============================================================================

fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&Value::Null)
}

/// Display form of an argument, empty when it was not supplied.
fn arg_text(args: &[Value], index: usize) -> String {
    args.get(index).map(ToString::to_string).unwrap_or_default()
}

/// Optional count argument; missing, empty or non-numeric means `None`.
fn arg_count(args: &[Value], index: usize) -> Option<usize> {
    args.get(index).and_then(Value::as_usize)
}

/// Forms following the count, as text.
fn forms(args: &[Value]) -> Vec<String> {
    args.iter().skip(1).map(ToString::to_string).collect()
}

/// Items given either as one list argument or as separate arguments.
fn items(args: &[Value]) -> &[Value] {
    match args.first() {
        Some(Value::List(list)) => list,
        _ => args,
    }
}

// =============================================================================
// Built-in functions
// =============================================================================

fn numf(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.numf(arg(args, 0), arg_count(args, 1)))
}

fn numerate(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.numerate(arg(args, 0), &forms(args)))
}

fn quant(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.quant(arg(args, 0), &forms(args)))
}

fn list(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    let word = arg_text(args, 0);
    let rest = args.get(1..).unwrap_or_default();
    Ok(locale.list(&word, items(rest)))
}

fn list_and(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.list_and(items(args)))
}

fn list_or(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.list_or(items(args)))
}

fn quoted_items<'a>(function: &str, args: &'a [Value]) -> Result<&'a [Value], EvalError> {
    match args.first() {
        Some(Value::DateTime(_)) => Err(EvalError::InvalidArgument {
            function: function.to_string(),
            message: format!("unrecognized list argument: {}", arg(args, 0)),
        }),
        _ => Ok(items(args)),
    }
}

fn list_and_quoted(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.list_and_quoted(quoted_items("list_and_quoted", args)?))
}

fn list_or_quoted(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.list_or_quoted(quoted_items("list_or_quoted", args)?))
}

/// Second argument of the datetime functions: a pattern or a format name,
/// or a `[date, time]` pair of format names.
fn date_format(args: &[Value]) -> DateFormat {
    match args.get(1) {
        Some(Value::List(pair)) if pair.len() == 2 => DateFormat::Pair {
            date: pair[0].to_string(),
            time: pair[1].to_string(),
        },
        Some(format) if format.is_truthy() => DateFormat::Pattern(format.to_string()),
        _ => DateFormat::Default,
    }
}

fn datetime(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.datetime(arg(args, 0), date_format(args)))
}

fn local_datetime(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.local_datetime(arg(args, 0), date_format(args)))
}

fn elide(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.elide(
        &arg_text(args, 0),
        arg_count(args, 1).unwrap_or_default(),
        arg_count(args, 2).unwrap_or_default(),
    ))
}

fn join(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    let separator = arg_text(args, 0);
    let rest = args.get(1..).unwrap_or_default();
    Ok(locale.join(&separator, items(rest)))
}

/// `[boolean,_1,when true,when false,when null]`. The null branch is used
/// only when supplied and the condition is null.
fn boolean(_locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    let condition = arg(args, 0);
    let branch = if args.len() > 3 && condition.is_null() {
        3
    } else if condition.is_truthy() {
        1
    } else {
        2
    };
    Ok(arg_text(args, branch))
}

/// `[comment,...]` renders nothing.
fn comment(_locale: &Locale, _args: &[Value]) -> Result<String, EvalError> {
    Ok(String::new())
}

/// `[asis,text]` renders its argument untouched.
fn asis(_locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(arg_text(args, 0))
}

fn format_bytes(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    let bytes = arg(args, 0).as_f64().unwrap_or(f64::NAN);
    locale.format_bytes(bytes, arg_count(args, 1))
}

fn quote(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(args
        .first()
        .map(|text| locale.quote(&text.to_string()))
        .unwrap_or_default())
}

fn alt_quote(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(args
        .first()
        .map(|text| locale.alt_quote(&text.to_string()))
        .unwrap_or_default())
}

fn quote_list_and(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.quote_list_and(items(args)))
}

fn alt_quote_list_and(locale: &Locale, args: &[Value]) -> Result<String, EvalError> {
    Ok(locale.alt_quote_list_and(items(args)))
}
