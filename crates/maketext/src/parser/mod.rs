//! Maketext template and CLDR date pattern parsers.
//!
//! Bracket-notation templates are tokenized and folded into an AST that the
//! interpreter evaluates against a locale. Date patterns are lexed into
//! literal runs and field-symbol runs for the datetime formatter.

pub mod ast;
mod date_pattern;
pub mod error;
mod template;

pub use ast::*;
pub use date_pattern::{PatternPart, parse_date_pattern};
pub use error::ParseError;
pub use template::{Token, parse_template, tokenize};
