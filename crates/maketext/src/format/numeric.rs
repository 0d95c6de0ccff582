//! Decimal number formatting with CLDR patterns.
//!
//! Rounding works on the decimal digits of the value rather than on its
//! binary floating point form, so `1.005` rounds to `1.01` at two places.

use crate::cldr::english;
use crate::interpreter::Locale;
use crate::types::Value;

/// The pattern and symbols a locale formats decimals with.
struct DecimalSymbols<'a> {
    pattern: &'a str,
    group: &'a str,
    decimal: &'a str,
}

impl Locale {
    /// Format a number with the locale's decimal pattern and separators.
    ///
    /// Rounds half up to `decimal_places` fraction digits (default: the
    /// locale's maximum, 6) and drops trailing fraction zeros. Values
    /// written in exponent form and non-numeric values are returned as
    /// their plain text.
    pub fn numf(&self, number: impl Into<Value>, decimal_places: Option<usize>) -> String {
        let number = number.into();
        let Some(digits) = number.numeric_repr() else {
            return number.to_string();
        };
        if digits.contains(['e', 'E']) {
            return digits;
        }
        let decimal_places = decimal_places.unwrap_or(self.max_decimal_places());
        format_decimal(&digits, decimal_places, &self.decimal_symbols())
    }

    /// The CLDR decimal pattern and separators, or English ones when any of
    /// the three is missing.
    fn decimal_symbols(&self) -> DecimalSymbols<'_> {
        let formats = self.cldr_formats();
        match formats.map(|f| {
            (
                f.decimal.as_deref(),
                f.decimal_format_group.as_deref(),
                f.decimal_format_decimal.as_deref(),
            )
        }) {
            Some((Some(pattern), Some(group), Some(decimal)))
                if !pattern.is_empty() && !group.is_empty() && !decimal.is_empty() =>
            {
                DecimalSymbols {
                    pattern,
                    group,
                    decimal,
                }
            }
            _ => DecimalSymbols {
                pattern: english::DECIMAL_PATTERN,
                group: english::GROUP_SEPARATOR,
                decimal: english::DECIMAL_SEPARATOR,
            },
        }
    }
}

fn format_decimal(digits: &str, decimal_places: usize, symbols: &DecimalSymbols<'_>) -> String {
    let (sign_negative, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(digits)),
    };
    let is_negative = sign_negative && magnitude.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let (integer, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));
    let integer = integer.trim_start_matches('0');
    let (whole, fraction) = round_fraction(
        if integer.is_empty() { "0" } else { integer },
        fraction,
        decimal_places,
    );

    let halves = split_unquoted(symbols.pattern, ';');
    let half = match (is_negative, halves.get(1)) {
        (true, Some(negative)) => (*negative).to_string(),
        (true, None) => format!("-{}", symbols.pattern),
        (false, _) => halves.first().copied().unwrap_or(english::DECIMAL_PATTERN).to_string(),
    };

    let layout = NumberLayout::parse(&half);
    let mut numeral = layout.group_integer(&whole, symbols.group);
    if !fraction.is_empty() {
        numeral.push_str(symbols.decimal);
        numeral.push_str(&fraction);
    }
    format!("{}{}{}", layout.prefix, numeral, layout.suffix)
}

/// Round a decimal fraction half up to `places` digits.
///
/// Returns the (possibly incremented) integer digits and the fraction
/// digits without trailing zeros.
fn round_fraction(integer: &str, fraction: &str, places: usize) -> (String, String) {
    if fraction.len() <= places {
        return (integer.to_string(), fraction.trim_end_matches('0').to_string());
    }
    let mut kept: Vec<u8> = fraction.as_bytes()[..places].to_vec();
    if fraction.as_bytes()[places] < b'5' {
        let kept = String::from_utf8_lossy(&kept).trim_end_matches('0').to_string();
        return (integer.to_string(), kept);
    }
    if increment_digits(&mut kept) {
        let mut whole = integer.as_bytes().to_vec();
        if increment_digits(&mut whole) {
            whole.insert(0, b'1');
        }
        return (String::from_utf8_lossy(&whole).into_owned(), String::new());
    }
    let kept = String::from_utf8_lossy(&kept).trim_end_matches('0').to_string();
    (integer.to_string(), kept)
}

/// Add one to a run of ASCII digits. Returns true on carry out.
fn increment_digits(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Split on `separator` wherever it is not inside a quoted literal.
fn split_unquoted(pattern: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in pattern.char_indices() {
        if c == '\'' {
            quoted = !quoted;
        } else if c == separator && !quoted {
            parts.push(&pattern[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&pattern[start..]);
    parts
}

/// Remove quoting from the literal part of a pattern.
fn unquote(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\'' {
            output.push(c);
        } else if chars.peek() == Some(&'\'') {
            output.push('\'');
            chars.next();
        }
    }
    output
}

/// One half of a decimal pattern split into literal prefix and suffix and
/// the integer digit groups between them.
struct NumberLayout {
    prefix: String,
    suffix: String,
    /// Digit placeholders of each integer group, rightmost group first.
    /// The last entry repeats for all remaining digits. Empty means the
    /// pattern does not group.
    groups: Vec<String>,
    /// Minimum integer digits when the pattern does not group.
    min_digits: usize,
}

impl NumberLayout {
    fn parse(half: &str) -> Self {
        let mut quoted = false;
        let mut first = None;
        let mut last = None;
        for (i, c) in half.char_indices() {
            match c {
                '\'' => quoted = !quoted,
                '0' | '#' if !quoted => {
                    first.get_or_insert(i);
                    last = Some(i);
                }
                _ => {}
            }
        }
        let (Some(first), Some(last)) = (first, last) else {
            return Self {
                prefix: unquote(half),
                suffix: String::new(),
                groups: Vec::new(),
                min_digits: 1,
            };
        };

        let inner = &half[first..=last];
        let integer_pattern = split_unquoted(inner, '.').first().copied().unwrap_or_default();
        let mut groups: Vec<String> = split_unquoted(integer_pattern, ',')
            .into_iter()
            .rev()
            .map(|group| group.chars().filter(|c| matches!(c, '0' | '#')).collect::<String>())
            .collect();
        let min_digits = integer_pattern.chars().filter(|c| *c == '0').count().max(1);
        if groups.len() > 1 {
            groups.pop();
            groups.retain(|group| !group.is_empty());
        } else {
            groups.clear();
        }

        Self {
            prefix: unquote(&half[..first]),
            suffix: unquote(&half[last + 1..]),
            groups,
            min_digits,
        }
    }

    /// Lay out integer digits into groups joined by `separator`.
    fn group_integer(&self, whole: &str, separator: &str) -> String {
        if self.groups.is_empty() {
            return format!("{whole:0>width$}", width = self.min_digits);
        }
        let mut digits: Vec<char> = whole.chars().collect();
        let mut chunks = Vec::new();
        let mut index = 0;
        while !digits.is_empty() {
            let Some(pattern) = self.groups.get(index).or_else(|| self.groups.last()) else {
                break;
            };
            index += 1;
            let mut chunk = Vec::with_capacity(pattern.len());
            for placeholder in pattern.chars().rev() {
                match (placeholder, digits.pop()) {
                    (_, Some(digit)) => chunk.push(digit),
                    ('0', None) => chunk.push('0'),
                    (_, None) => {}
                }
            }
            chunks.push(chunk.into_iter().rev().collect::<String>());
        }
        chunks.reverse();
        chunks.join(separator)
    }
}
