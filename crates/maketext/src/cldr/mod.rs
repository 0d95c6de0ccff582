//! Typed model of the per-locale CLDR data bundle.
//!
//! A bundle is the JSON rendition of one generated CLDR locale file: a
//! `datetime_info` table of month/day/era names and date patterns, and a
//! `misc_info` table of delimiters, orientation, plural categories and
//! number/list/ellipsis formats. Keys the formatters do not consume are
//! tolerated and ignored; `datetime_info` keeps every unmodeled string so
//! that named patterns can be looked up by key.

pub(crate) mod english;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::interpreter::LoadError;

/// A CLDR locale file as shipped on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CldrSource {
    /// The language tag the data was generated for.
    pub locale: Option<String>,
    pub datetime_info: Option<DatetimeInfo>,
    pub misc_info: Option<MiscInfo>,
}

impl CldrSource {
    /// Parse a CLDR bundle from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Json {
            path: "<inline>".into(),
            source,
        })
    }

    /// Load a CLDR bundle from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The bundle held by a locale: the two data tables without the tag.
    pub fn into_bundle(self) -> CldrBundle {
        CldrBundle {
            datetime: self.datetime_info,
            misc_info: self.misc_info,
        }
    }
}

/// The CLDR data a locale formats with.
///
/// Either table may be absent, in which case the formatters fall back to
/// English behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CldrBundle {
    pub datetime: Option<DatetimeInfo>,
    pub misc_info: Option<MiscInfo>,
}

impl CldrBundle {
    /// Replace every table present in `partial`, keeping the others.
    pub fn merge(&mut self, partial: CldrBundle) {
        if partial.datetime.is_some() {
            self.datetime = partial.datetime;
        }
        if partial.misc_info.is_some() {
            self.misc_info = partial.misc_info;
        }
    }
}

/// Calendar names and date/time patterns.
///
/// Day tables start on Monday. Era tables are ordered BCE, CE.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatetimeInfo {
    pub month_format_wide: Vec<String>,
    pub month_format_abbreviated: Vec<String>,
    pub month_format_narrow: Vec<String>,
    pub month_stand_alone_wide: Vec<String>,
    pub month_stand_alone_abbreviated: Vec<String>,
    pub month_stand_alone_narrow: Vec<String>,
    pub day_format_wide: Vec<String>,
    pub day_format_abbreviated: Vec<String>,
    pub day_format_narrow: Vec<String>,
    pub day_stand_alone_wide: Vec<String>,
    pub day_stand_alone_abbreviated: Vec<String>,
    pub day_stand_alone_narrow: Vec<String>,
    pub am_pm_abbreviated: Vec<String>,
    pub era_wide: Vec<String>,
    pub era_abbreviated: Vec<String>,
    pub era_narrow: Vec<String>,

    /// CLDR week start, 1 = Monday through 7 = Sunday.
    #[serde(deserialize_with = "deserialize_day_number")]
    pub first_day_of_week: Option<u8>,

    /// Every other key, including the named patterns such as
    /// `date_format_long` and `datetime_format`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

impl DatetimeInfo {
    /// A named pattern (`date_format_long`, `time_format_short`, ...).
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(JsonValue::as_str)
    }

    /// Install a named pattern, replacing any previous value.
    pub fn set_pattern(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.extra
            .insert(name.into(), JsonValue::String(pattern.into()));
    }
}

/// Accepts `"1"`, `1` or `null`.
fn deserialize_day_number<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DayNumber {
        Number(u8),
        Text(String),
    }

    Ok(
        match Option::<DayNumber>::deserialize(deserializer)? {
            Some(DayNumber::Number(n)) => Some(n),
            Some(DayNumber::Text(text)) => text.trim().parse().ok(),
            None => None,
        },
    )
}

/// Delimiters, orientation, plural categories and number/list formats.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MiscInfo {
    pub delimiters: Option<Delimiters>,
    pub orientation: Option<Orientation>,
    pub plural_forms: Option<PluralForms>,
    pub cldr_formats: Option<CldrFormats>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    pub quotation_start: Option<String>,
    pub quotation_end: Option<String>,
    pub alternate_quotation_start: Option<String>,
    pub alternate_quotation_end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Orientation {
    /// `left-to-right` or `right-to-left`.
    pub characters: Option<String>,
    pub lines: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PluralForms {
    /// The plural categories this locale uses, in the order translators
    /// supply forms for them.
    pub category_list: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CldrFormats {
    /// Decimal number pattern, like `#,##0.###`.
    pub decimal: Option<String>,
    #[serde(rename = "_decimal_format_group")]
    pub decimal_format_group: Option<String>,
    #[serde(rename = "_decimal_format_decimal")]
    pub decimal_format_decimal: Option<String>,
    pub percent: Option<String>,
    pub list: Option<ListTemplates>,
    pub list_or: Option<ListTemplates>,
    pub ellipsis: Option<EllipsisTemplates>,
}

/// CLDR list patterns. Each template joins `{0}` and `{1}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListTemplates {
    /// Joins exactly two items.
    #[serde(rename = "2")]
    pub two: Option<String>,
    pub start: Option<String>,
    pub middle: Option<String>,
    pub end: Option<String>,
}

/// CLDR ellipsis patterns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EllipsisTemplates {
    /// Text elided at the start: `…{0}`.
    pub initial: Option<String>,
    /// Text elided in the middle: `{0}…{1}`.
    pub medial: Option<String>,
    /// Text elided at the end: `{0}…`.
    pub r#final: Option<String>,
}
