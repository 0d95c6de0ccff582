//! Bracket-notation template parser using winnow.
//!
//! Tokenizes a maketext string into text runs, `~` escapes and brackets,
//! then folds the token stream into a [`Template`]. Handles:
//! - Literal text, with `~[`, `~]` and `~~` producing literal brackets/tildes
//! - `[_N]` placeholders
//! - `[function,arg,...]` calls, with `~,` for a literal comma in an argument

use std::mem;

use super::ast::*;
use super::error::ParseError;
use maketext_semantics::{
    ESCAPE_CHAR, ESCAPED_COMMA, FieldKind, canonicalize_alias, classify_field, is_tilde_literal,
    parse_positional,
};
use winnow::combinator::{alt, preceded};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// A lexical token of a maketext string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of characters containing no `~`, `[` or `]`.
    Text(&'a str),
    /// `~` followed by any character.
    Escape(char),
    Open,
    Close,
    /// A trailing `~` with nothing after it.
    Tilde,
}

/// Split a template into tokens paired with their byte offsets.
///
/// Every character belongs to exactly one token, so tokenizing never fails.
pub fn tokenize(input: &str) -> Vec<(usize, Token<'_>)> {
    let mut remaining = input;
    let mut tokens = Vec::new();
    while !remaining.is_empty() {
        let offset = input.len() - remaining.len();
        let Ok(next) = token.parse_next(&mut remaining) else {
            tokens.push((offset, Token::Text(remaining)));
            break;
        };
        tokens.push((offset, next));
    }
    tokens
}

fn token<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    alt((text, escape, '['.value(Token::Open), ']'.value(Token::Close), bare_tilde))
        .parse_next(input)
}

fn text<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    take_while(1.., |c: char| !matches!(c, ESCAPE_CHAR | '[' | ']'))
        .map(Token::Text)
        .parse_next(input)
}

fn escape<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    preceded(ESCAPE_CHAR, any).map(Token::Escape).parse_next(input)
}

fn bare_tilde<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    ESCAPE_CHAR.value(Token::Tilde).parse_next(input)
}

/// Parse a maketext template into an AST.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut group: Option<(usize, String)> = None;

    for (offset, token) in tokenize(input) {
        match token {
            Token::Open => {
                if group.is_some() {
                    return Err(ParseError::NestedGroup { offset });
                }
                group = Some((offset, String::new()));
            }
            Token::Close => {
                let Some((open, body)) = group.take() else {
                    return Err(ParseError::UnmatchedClose { offset });
                };
                if body.is_empty() {
                    return Err(ParseError::EmptyGroup { offset: open });
                }
                flush_literal(&mut segments, &mut literal);
                segments.push(group_segment(&body, open)?);
            }
            Token::Escape(c) => match &mut group {
                Some((_, body)) if c == ',' => body.push(ESCAPED_COMMA),
                Some((_, body)) => body.push(c),
                None if is_tilde_literal(c) => literal.push(c),
                None => {
                    literal.push(ESCAPE_CHAR);
                    literal.push(c);
                }
            },
            Token::Tilde => match &mut group {
                Some((_, body)) => body.push(ESCAPE_CHAR),
                None => literal.push(ESCAPE_CHAR),
            },
            Token::Text(text) => match &mut group {
                Some((_, body)) => body.push_str(text),
                None => literal.push_str(text),
            },
        }
    }

    if let Some((offset, _)) = group {
        return Err(ParseError::UnclosedGroup { offset });
    }
    flush_literal(&mut segments, &mut literal);
    Ok(Template { segments })
}

fn flush_literal(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(mem::take(literal)));
    }
}

/// Interpret the body of a closed bracket group.
fn group_segment(body: &str, offset: usize) -> Result<Segment, ParseError> {
    let fields: Vec<String> = body
        .split(',')
        .map(|field| field.replace(ESCAPED_COMMA, ","))
        .collect();

    let Some((name, rest)) = fields.split_first() else {
        return Err(ParseError::EmptyGroup { offset });
    };

    if rest.is_empty() {
        return parse_positional(name)
            .map(Segment::Placeholder)
            .ok_or_else(|| ParseError::InvalidPlaceholder {
                offset,
                text: name.clone(),
            });
    }

    let args = rest
        .iter()
        .map(|field| match classify_field(field) {
            FieldKind::Literal => Ok(Argument::Literal(field.clone())),
            FieldKind::Positional(index) => Ok(Argument::Positional(index)),
            FieldKind::Spread => Ok(Argument::Spread),
            FieldKind::Malformed => Err(ParseError::InvalidArgument {
                offset,
                text: field.clone(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Segment::Call {
        function: canonicalize_alias(name).to_string(),
        args,
        offset,
    })
}
