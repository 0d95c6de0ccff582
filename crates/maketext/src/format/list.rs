//! List joining and quotation.

use std::fmt::Display;

use crate::cldr::english::{self, ListDefaults};
use crate::cldr::ListTemplates;
use crate::format::fill_pattern;
use crate::interpreter::Locale;

#[derive(Clone, Copy)]
enum ListKind {
    And,
    Or,
}

#[derive(Clone, Copy)]
enum QuoteKind {
    Primary,
    Alternate,
}

impl Locale {
    /// Join items with a conjunction word, the way Perl maketext does.
    ///
    /// Two items become `a WORD b`. Three or more become `a, b, WORD c`,
    /// using the locale's list and oxford separators. An empty `word`
    /// uses the locale's default conjunction (`&`).
    pub fn list<T: Display>(&self, word: &str, items: &[T]) -> String {
        let word = if word.is_empty() {
            self.list_default_and()
        } else {
            word
        };
        match items {
            [] => String::new(),
            [only] => only.to_string(),
            [first, second] => format!("{first} {word} {second}"),
            [head @ .., last] => {
                let head: Vec<String> = head.iter().map(ToString::to_string).collect();
                format!(
                    "{}{} {word} {last}",
                    head.join(self.list_separator()),
                    self.oxford_separator()
                )
            }
        }
    }

    /// Join items into a localized "and" list using CLDR list patterns.
    pub fn list_and<T: Display>(&self, items: &[T]) -> String {
        self.join_cldr_list(ListKind::And, items)
    }

    /// Join items into a localized "or" list using CLDR list patterns.
    pub fn list_or<T: Display>(&self, items: &[T]) -> String {
        self.join_cldr_list(ListKind::Or, items)
    }

    /// Quote each item, then [`Locale::list_and`] them. No items yields one
    /// empty quoted item.
    pub fn list_and_quoted<T: Display>(&self, items: &[T]) -> String {
        self.list_and(&self.quote_items(QuoteKind::Primary, items))
    }

    /// Quote each item, then [`Locale::list_or`] them.
    pub fn list_or_quoted<T: Display>(&self, items: &[T]) -> String {
        self.list_or(&self.quote_items(QuoteKind::Primary, items))
    }

    /// Wrap text in the locale's quotation marks (`“…”` without CLDR data).
    pub fn quote(&self, text: &str) -> String {
        self.apply_quotes(QuoteKind::Primary, text)
    }

    /// Wrap text in the locale's alternate quotation marks (`‘…’` without
    /// CLDR data).
    pub fn alt_quote(&self, text: &str) -> String {
        self.apply_quotes(QuoteKind::Alternate, text)
    }

    pub fn quote_list_and<T: Display>(&self, items: &[T]) -> String {
        self.list_and(&self.quote_items(QuoteKind::Primary, items))
    }

    pub fn alt_quote_list_and<T: Display>(&self, items: &[T]) -> String {
        self.list_and(&self.quote_items(QuoteKind::Alternate, items))
    }

    /// Join items with a plain separator.
    pub fn join<T: Display>(&self, separator: &str, items: &[T]) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn quote_items<T: Display>(&self, kind: QuoteKind, items: &[T]) -> Vec<String> {
        if items.is_empty() {
            return vec![self.apply_quotes(kind, "")];
        }
        items
            .iter()
            .map(|item| self.apply_quotes(kind, &item.to_string()))
            .collect()
    }

    fn apply_quotes(&self, kind: QuoteKind, text: &str) -> String {
        let delimiters = self.misc_info().and_then(|misc| misc.delimiters.as_ref());
        let (start, end) = match kind {
            QuoteKind::Primary => (
                delimiters.and_then(|d| d.quotation_start.as_deref()),
                delimiters.and_then(|d| d.quotation_end.as_deref()),
            ),
            QuoteKind::Alternate => (
                delimiters.and_then(|d| d.alternate_quotation_start.as_deref()),
                delimiters.and_then(|d| d.alternate_quotation_end.as_deref()),
            ),
        };
        let (default_start, default_end) = match kind {
            QuoteKind::Primary => (english::QUOTE_START, english::QUOTE_END),
            QuoteKind::Alternate => (english::ALT_QUOTE_START, english::ALT_QUOTE_END),
        };
        format!(
            "{}{text}{}",
            start.unwrap_or(default_start),
            end.unwrap_or(default_end)
        )
    }

    fn join_cldr_list<T: Display>(&self, kind: ListKind, items: &[T]) -> String {
        let templates = self.cldr_formats().and_then(|formats| match kind {
            ListKind::And => formats.list.as_ref(),
            ListKind::Or => formats.list_or.as_ref(),
        });
        let defaults = match kind {
            ListKind::And => &english::LIST_AND,
            ListKind::Or => &english::LIST_OR,
        };
        let pattern = |slot| list_pattern(templates, defaults, slot);
        let items: Vec<String> = items.iter().map(ToString::to_string).collect();

        match items.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => fill_pattern(pattern(ListSlot::Two), first, second),
            [first, second, rest @ ..] => {
                let mut text = fill_pattern(pattern(ListSlot::Start), first, second);
                for (i, item) in rest.iter().enumerate() {
                    let slot = if i + 1 == rest.len() {
                        ListSlot::End
                    } else {
                        ListSlot::Middle
                    };
                    text = fill_pattern(pattern(slot), &text, item);
                }
                text
            }
        }
    }
}

#[derive(Clone, Copy)]
enum ListSlot {
    Two,
    Start,
    Middle,
    End,
}

/// The CLDR pattern for one position in a list, or the English one.
fn list_pattern<'a>(
    templates: Option<&'a ListTemplates>,
    defaults: &'static ListDefaults,
    slot: ListSlot,
) -> &'a str {
    let custom = templates.and_then(|t| match slot {
        ListSlot::Two => t.two.as_deref(),
        ListSlot::Start => t.start.as_deref(),
        ListSlot::Middle => t.middle.as_deref(),
        ListSlot::End => t.end.as_deref(),
    });
    custom.unwrap_or(match slot {
        ListSlot::Two => defaults.two,
        ListSlot::Start => defaults.start,
        ListSlot::Middle => defaults.middle,
        ListSlot::End => defaults.end,
    })
}
