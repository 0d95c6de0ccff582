//! CLDR date pattern lexer.
//!
//! A pattern is a sequence of field runs (one ASCII letter repeated, like
//! `MMMM` or `yy`), quoted literals (`'at'`, with `''` for an apostrophe)
//! and any other literal characters.

use winnow::combinator::{alt, opt, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// One piece of a lexed date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    Literal(String),
    /// A field symbol and the number of times it is repeated.
    Field { symbol: char, width: usize },
}

/// Lex a CLDR date pattern. Adjacent literals are merged.
pub fn parse_date_pattern(pattern: &str) -> Vec<PatternPart> {
    let mut remaining = pattern;
    let parts: Vec<PatternPart> = repeat(0.., part)
        .parse_next(&mut remaining)
        .unwrap_or_default();

    let mut merged: Vec<PatternPart> = Vec::with_capacity(parts.len());
    for part in parts {
        match (merged.last_mut(), part) {
            (Some(PatternPart::Literal(prev)), PatternPart::Literal(text)) => prev.push_str(&text),
            (_, part) => merged.push(part),
        }
    }
    if !remaining.is_empty() {
        merged.push(PatternPart::Literal(remaining.to_string()));
    }
    merged
}

fn part(input: &mut &str) -> ModalResult<PatternPart> {
    alt((doubled_quote, quoted, field, literal_run)).parse_next(input)
}

fn doubled_quote(input: &mut &str) -> ModalResult<PatternPart> {
    "''".map(|_| PatternPart::Literal("'".to_string()))
        .parse_next(input)
}

/// `'...'`, where `''` inside stands for one apostrophe. An unterminated
/// quote runs to the end of the pattern.
fn quoted(input: &mut &str) -> ModalResult<PatternPart> {
    '\''.parse_next(input)?;
    let pieces: Vec<&str> = repeat(
        0..,
        alt(("''".value("'"), take_while(1.., |c: char| c != '\''))),
    )
    .parse_next(input)?;
    opt('\'').parse_next(input)?;
    Ok(PatternPart::Literal(pieces.concat()))
}

fn field(input: &mut &str) -> ModalResult<PatternPart> {
    let symbol = one_of(|c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    let rest = take_while(0.., move |c: char| c == symbol).parse_next(input)?;
    Ok(PatternPart::Field {
        symbol,
        width: rest.len() + 1,
    })
}

fn literal_run(input: &mut &str) -> ModalResult<PatternPart> {
    take_while(1.., |c: char| !c.is_ascii_alphabetic() && c != '\'')
        .map(|text: &str| PatternPart::Literal(text.to_string()))
        .parse_next(input)
}
