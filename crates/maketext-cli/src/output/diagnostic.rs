//! Miette diagnostic wrapper for phrase problems.

use maketext::parser::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into one phrase.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(maketext::check))]
pub struct PhraseDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PhraseDiagnostic {
    /// Create a diagnostic from a ParseError in `phrase`.
    pub fn from_parse_error(origin: &str, phrase: &str, err: &ParseError) -> Self {
        let help = match err {
            ParseError::NestedGroup { .. } | ParseError::UnmatchedClose { .. } => {
                Some("write a literal bracket as ~[ or ~]".to_string())
            }
            ParseError::InvalidPlaceholder { .. } => {
                Some("a single-field group must be a positional reference like [_1]".to_string())
            }
            ParseError::InvalidArgument { .. } => {
                Some("argument references are _1, _2, ... or _*".to_string())
            }
            ParseError::EmptyGroup { .. } | ParseError::UnclosedGroup { .. } => None,
        };
        Self::at(origin, phrase, err.offset(), err.to_string(), help)
    }

    /// Create a diagnostic for a bracket function the locale does not have.
    pub fn unknown_function(
        origin: &str,
        phrase: &str,
        offset: usize,
        name: &str,
        suggestions: &[String],
    ) -> Self {
        let help = (!suggestions.is_empty())
            .then(|| format!("did you mean: {}?", suggestions.join(", ")));
        Self::at(
            origin,
            phrase,
            offset,
            format!("unknown function '{name}'"),
            help,
        )
    }

    fn at(origin: &str, phrase: &str, offset: usize, message: String, help: Option<String>) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(phrase.len());
        let len = phrase[offset..].chars().next().map_or(0, char::len_utf8);
        PhraseDiagnostic {
            src: NamedSource::new(origin, phrase.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
