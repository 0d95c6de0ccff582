//! Shared maketext semantic tables used by both runtime and macro validation.
//!
//! This crate centralizes bracket function name/alias resolution and the
//! lexical rules for bracket-group fields, so that the compile-time
//! `translatable!` check and the runtime evaluator agree on what a template
//! means.

/// The escape character of bracket notation.
pub const ESCAPE_CHAR: char = '~';

/// Placeholder for a `~,` escaped comma while a bracket group is being split.
///
/// BEL never occurs in real UI strings, so it can stand in for a literal comma
/// until the group has been split on unescaped commas.
pub const ESCAPED_COMMA: char = '\u{7}';

/// The field that splices every positional argument into a function call.
pub const SPREAD_ARGUMENT: &str = "_*";

/// Canonical bracket function identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionId {
    Numf,
    Numerate,
    Quant,
    List,
    ListAnd,
    ListOr,
    ListAndQuoted,
    ListOrQuoted,
    Datetime,
    LocalDatetime,
    Elide,
    Join,
    Boolean,
    Comment,
    Asis,
    FormatBytes,
    Quote,
    AltQuote,
    QuoteListAnd,
    AltQuoteListAnd,
}

impl FunctionId {
    /// Every built-in bracket function, in registration order.
    pub const ALL: &'static [FunctionId] = &[
        FunctionId::Numf,
        FunctionId::Numerate,
        FunctionId::Quant,
        FunctionId::List,
        FunctionId::ListAnd,
        FunctionId::ListOr,
        FunctionId::ListAndQuoted,
        FunctionId::ListOrQuoted,
        FunctionId::Datetime,
        FunctionId::LocalDatetime,
        FunctionId::Elide,
        FunctionId::Join,
        FunctionId::Boolean,
        FunctionId::Comment,
        FunctionId::Asis,
        FunctionId::FormatBytes,
        FunctionId::Quote,
        FunctionId::AltQuote,
        FunctionId::QuoteListAnd,
        FunctionId::AltQuoteListAnd,
    ];

    /// The name this function is invoked by inside a bracket group.
    pub fn name(self) -> &'static str {
        match self {
            FunctionId::Numf => "numf",
            FunctionId::Numerate => "numerate",
            FunctionId::Quant => "quant",
            FunctionId::List => "list",
            FunctionId::ListAnd => "list_and",
            FunctionId::ListOr => "list_or",
            FunctionId::ListAndQuoted => "list_and_quoted",
            FunctionId::ListOrQuoted => "list_or_quoted",
            FunctionId::Datetime => "datetime",
            FunctionId::LocalDatetime => "local_datetime",
            FunctionId::Elide => "elide",
            FunctionId::Join => "join",
            FunctionId::Boolean => "boolean",
            FunctionId::Comment => "comment",
            FunctionId::Asis => "asis",
            FunctionId::FormatBytes => "format_bytes",
            FunctionId::Quote => "quote",
            FunctionId::AltQuote => "alt_quote",
            FunctionId::QuoteListAnd => "quote_list_and",
            FunctionId::AltQuoteListAnd => "alt_quote_list_and",
        }
    }
}

/// Canonicalize shorthand function names (`#` and `*`).
pub fn canonicalize_alias(name: &str) -> &str {
    match name {
        "#" => "numf",
        "*" => "quant",
        _ => name,
    }
}

/// Resolve a bracket function name, including shorthand aliases, to a
/// built-in function id.
pub fn resolve_function(name: &str) -> Option<FunctionId> {
    let canonical = canonicalize_alias(name);
    FunctionId::ALL
        .iter()
        .copied()
        .find(|id| id.name() == canonical)
}

/// Names of every built-in bracket function, without aliases.
///
/// Used for diagnostics and typo suggestions.
pub fn builtin_function_names() -> Vec<&'static str> {
    FunctionId::ALL.iter().map(|id| id.name()).collect()
}

/// Characters that `~` turns into literals outside a bracket group.
pub fn is_tilde_literal(c: char) -> bool {
    matches!(c, '[' | ']' | '~')
}

/// How a single comma-separated bracket field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text passed through as a string.
    Literal,
    /// `_N`: the N-th positional argument (1-based).
    Positional(usize),
    /// `_*`: every positional argument.
    Spread,
    /// Starts with `_` but is neither `_*` nor `_` followed by digits.
    Malformed,
}

/// Classify a bracket field.
pub fn classify_field(field: &str) -> FieldKind {
    let Some(rest) = field.strip_prefix('_') else {
        return FieldKind::Literal;
    };
    if field == SPREAD_ARGUMENT {
        return FieldKind::Spread;
    }
    parse_positional_digits(rest).map_or(FieldKind::Malformed, FieldKind::Positional)
}

/// Parse a `_N` positional reference, returning `N`.
pub fn parse_positional(field: &str) -> Option<usize> {
    field.strip_prefix('_').and_then(parse_positional_digits)
}

fn parse_positional_digits(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
