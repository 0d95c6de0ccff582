//! Parse error types for maketext templates.

use thiserror::Error;

/// An error that occurred while parsing a template.
///
/// Every variant carries the byte offset in the template where the problem
/// was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `[` appeared while a bracket group was already open.
    #[error("nested '[' at byte {offset}")]
    NestedGroup { offset: usize },

    /// A `]` appeared with no open bracket group.
    #[error("unmatched ']' at byte {offset}")]
    UnmatchedClose { offset: usize },

    /// A bracket group with nothing inside it: `[]`.
    #[error("empty bracket group at byte {offset}")]
    EmptyGroup { offset: usize },

    /// The template ended while a bracket group was still open.
    #[error("unclosed '[' at byte {offset}")]
    UnclosedGroup { offset: usize },

    /// A single-field bracket group that is not a `_N` reference.
    #[error("invalid placeholder '[{text}]' at byte {offset}")]
    InvalidPlaceholder { offset: usize, text: String },

    /// A function argument starting with `_` that is neither `_N` nor `_*`.
    #[error("invalid argument reference '{text}' at byte {offset}")]
    InvalidArgument { offset: usize, text: String },
}

impl ParseError {
    /// Byte offset of the problem in the template.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::NestedGroup { offset }
            | ParseError::UnmatchedClose { offset }
            | ParseError::EmptyGroup { offset }
            | ParseError::UnclosedGroup { offset }
            | ParseError::InvalidPlaceholder { offset, .. }
            | ParseError::InvalidArgument { offset, .. } => *offset,
        }
    }
}
