//! CLDR date and time formatting.
//!
//! Patterns are expanded field by field against the locale's calendar
//! names. All fields render in UTC; [`Locale::local_datetime`] shifts the
//! instant first and rewrites the zone name.

use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, TimeZone, Timelike, Utc};
use tracing::warn;

use crate::cldr::{DatetimeInfo, english};
use crate::interpreter::Locale;
use crate::parser::{PatternPart, parse_date_pattern};
use crate::types::Value;

/// Rendered for inputs that are not a valid point in time.
const INVALID_DATE: &str = "Invalid Date";

/// Prefixes that mark a format argument as a named pattern.
const NAMED_FORMAT_PREFIXES: [&str; 4] = [
    "date_format_",
    "time_format_",
    "datetime_format_",
    "special_format_",
];

/// How a datetime function should format its value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// The locale's `date_format_long`.
    #[default]
    Default,
    /// A pattern name such as `date_format_short`, or a literal CLDR
    /// pattern such as `yyyy-MM-dd`.
    Pattern(String),
    /// A date format and a time format, by size (`short`, `medium`, `long`,
    /// `full`), combined with the locale's `datetime_format`.
    Pair { date: String, time: String },
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        if pattern.is_empty() {
            DateFormat::Default
        } else {
            DateFormat::Pattern(pattern.to_string())
        }
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        DateFormat::from(pattern.as_str())
    }
}

impl From<(&str, &str)> for DateFormat {
    fn from((date, time): (&str, &str)) -> Self {
        DateFormat::Pair {
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}

impl Locale {
    /// Format a point in time with a CLDR pattern, in UTC.
    ///
    /// `when` may be a [`Value::DateTime`], a number of seconds since the
    /// Unix epoch, or `Null` for the current time. Anything else renders
    /// `Invalid Date`. Without CLDR datetime
    /// data the instant's default text is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use maketext::{Locale, cldr::CldrBundle, cldr::DatetimeInfo};
    ///
    /// let mut locale = Locale::new();
    /// locale.set_cldr(CldrBundle {
    ///     datetime: Some(DatetimeInfo::default()),
    ///     misc_info: None,
    /// });
    /// assert_eq!(locale.datetime(0, "yyyy-MM-dd HH:mm"), "1970-01-01 00:00");
    /// ```
    pub fn datetime(&self, when: impl Into<Value>, format: impl Into<DateFormat>) -> String {
        let Some(instant) = resolve_instant(&when.into()) else {
            return INVALID_DATE.to_string();
        };
        let Some(info) = self.datetime_info() else {
            return instant.to_string();
        };
        let pattern = resolve_pattern(info, &format.into());
        expand_pattern(&pattern, &instant, info)
    }

    /// [`Locale::datetime`] in the locale's configured zone, or the
    /// system's local time zone.
    pub fn local_datetime(&self, when: impl Into<Value>, format: impl Into<DateFormat>) -> String {
        let Some(instant) = resolve_instant(&when.into()) else {
            return INVALID_DATE.to_string();
        };
        let offset = self
            .utc_offset()
            .unwrap_or_else(|| Local.offset_from_utc_datetime(&instant.naive_utc()).fix());
        self.local_datetime_with_offset(instant, format, offset)
    }

    /// [`Locale::datetime`] shifted by a fixed UTC offset.
    ///
    /// The first `UTC` zone name in the output becomes `GMT±hhmm`.
    pub fn local_datetime_with_offset(
        &self,
        when: impl Into<Value>,
        format: impl Into<DateFormat>,
        offset: FixedOffset,
    ) -> String {
        let when = when.into();
        if self.datetime_info().is_none() {
            return self.datetime(when, format);
        }
        let Some(instant) = resolve_instant(&when) else {
            return INVALID_DATE.to_string();
        };
        let seconds = offset.local_minus_utc();
        let shifted = instant.with_timezone(&offset).naive_local().and_utc();
        let rendered = self.datetime(shifted, format);
        if !rendered.contains("UTC") {
            return rendered;
        }
        let minutes = seconds.unsigned_abs().div_euclid(60);
        let zone = format!(
            "GMT{}{:02}{:02}",
            if seconds < 0 { '-' } else { '+' },
            minutes.div_euclid(60),
            minutes.rem_euclid(60)
        );
        rendered.replacen("UTC", &zone, 1)
    }

    /// The first day of the week: the CLDR day number plus one, with 8
    /// wrapping to 0.
    ///
    /// Returns 0 when the locale has no CLDR week data.
    pub fn get_first_day_of_week(&self) -> u8 {
        self.datetime_info()
            .and_then(|info| info.first_day_of_week)
            .map_or(0, |day| match day.saturating_add(1) {
                8 => 0,
                shifted => shifted,
            })
    }
}

/// `Null`, `false` and the empty string mean now. Numbers and numeric
/// strings are seconds since the epoch, so `0` is the epoch itself.
fn resolve_instant(when: &Value) -> Option<DateTime<Utc>> {
    match when {
        Value::Null | Value::Bool(false) => Some(Utc::now()),
        Value::String(text) if text.is_empty() => Some(Utc::now()),
        Value::DateTime(instant) => Some(*instant),
        _ => {
            let seconds = when.as_f64()?;
            let millis = (seconds * 1000.0).trunc();
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis as i64)
        }
    }
}

/// A named pattern from the locale, or the English one.
fn named<'a>(info: &'a DatetimeInfo, name: &str) -> Option<&'a str> {
    info.pattern(name).or_else(|| english::pattern(name))
}

fn resolve_pattern(info: &DatetimeInfo, format: &DateFormat) -> String {
    let long_date = || {
        named(info, "date_format_long")
            .unwrap_or("MMMM d, y")
            .to_string()
    };

    match format {
        DateFormat::Default => long_date(),
        DateFormat::Pattern(pattern)
            if NAMED_FORMAT_PREFIXES
                .iter()
                .any(|prefix| pattern.starts_with(prefix)) =>
        {
            named(info, pattern).map_or_else(long_date, str::to_string)
        }
        DateFormat::Pattern(pattern) => pattern.clone(),
        DateFormat::Pair { date, time } => {
            let date = named(info, &format!("date_format_{date}")).unwrap_or_default();
            let time = named(info, &format!("time_format_{time}")).unwrap_or_default();
            let glue = named(info, "datetime_format").unwrap_or(english::DATETIME_GLUE);
            glue.replace("{1}", date).replace("{0}", time)
        }
    }
}

fn expand_pattern(pattern: &str, instant: &DateTime<Utc>, info: &DatetimeInfo) -> String {
    let mut output = String::new();
    for part in parse_date_pattern(pattern) {
        match part {
            PatternPart::Literal(text) => output.push_str(&text),
            PatternPart::Field { symbol, width } => {
                match field_text(symbol, width, instant, info) {
                    Some(text) => output.push_str(&text),
                    None => {
                        warn!(symbol = %symbol, width, pattern, "unknown datetime field");
                        output.push_str(&symbol.to_string().repeat(width));
                    }
                }
            }
        }
    }
    output
}

/// Render one field run, or `None` for an unsupported symbol.
fn field_text(symbol: char, width: usize, instant: &DateTime<Utc>, info: &DatetimeInfo) -> Option<String> {
    let year = instant.year();
    let month = instant.month0() as usize;
    let weekday = instant.weekday().num_days_from_monday() as usize;
    let era = usize::from(year >= 0);

    Some(match (symbol, width) {
        ('y', 2) => format!("{:02}", year.unsigned_abs().rem_euclid(100)),
        ('y', 1 | 3 | 4) => year.unsigned_abs().to_string(),

        ('M', 5) => name(&info.month_format_narrow, &english::MONTHS_NARROW, month),
        ('M', 4) => name(&info.month_format_wide, &english::MONTHS_WIDE, month),
        ('M', 3) => name(&info.month_format_abbreviated, &english::MONTHS_ABBREVIATED, month),
        ('L', 5) => name(&info.month_stand_alone_narrow, &english::MONTHS_NARROW, month),
        ('L', 4) => name(&info.month_stand_alone_wide, &english::MONTHS_WIDE, month),
        ('L', 3) => name(
            &info.month_stand_alone_abbreviated,
            &english::MONTHS_ABBREVIATED,
            month,
        ),
        ('M' | 'L', 2) => format!("{:02}", instant.month()),
        ('M' | 'L', 1) => instant.month().to_string(),

        ('E', 5) => name(&info.day_format_narrow, &english::DAYS_NARROW, weekday),
        ('E', 4) => name(&info.day_format_wide, &english::DAYS_WIDE, weekday),
        ('E', 1..=3) => name(&info.day_format_abbreviated, &english::DAYS_ABBREVIATED, weekday),
        ('c', 5) => name(&info.day_stand_alone_narrow, &english::DAYS_NARROW, weekday),
        ('c', 4) => name(&info.day_stand_alone_wide, &english::DAYS_WIDE, weekday),
        ('c', 1..=3) => name(
            &info.day_stand_alone_abbreviated,
            &english::DAYS_ABBREVIATED,
            weekday,
        ),

        ('d', 2) => format!("{:02}", instant.day()),
        ('d', 1) => instant.day().to_string(),
        ('h', 2) => format!("{:02}", instant.hour12().1),
        ('h', 1) => instant.hour12().1.to_string(),
        ('H', 2) => format!("{:02}", instant.hour()),
        ('H', 1) => instant.hour().to_string(),
        ('m', 2) => format!("{:02}", instant.minute()),
        ('m', 1) => instant.minute().to_string(),
        ('s', 2) => format!("{:02}", instant.second()),
        ('s', 1) => instant.second().to_string(),
        ('a', 1) => name(
            &info.am_pm_abbreviated,
            &english::AM_PM,
            usize::from(instant.hour12().0),
        ),

        ('z' | 'v', 1 | 4) => "UTC".to_string(),

        ('G', 1..=3) => name(&info.era_abbreviated, &english::ERAS_ABBREVIATED, era),
        ('G', 4) => name(&info.era_wide, &english::ERAS_WIDE, era),
        ('G', 5) => name(&info.era_narrow, &english::ERAS_NARROW, era),

        _ => return None,
    })
}

/// A calendar name from the locale's table, or the English one.
fn name(table: &[String], fallback: &[&str], index: usize) -> String {
    table
        .get(index)
        .map(String::as_str)
        .or_else(|| fallback.get(index).copied())
        .unwrap_or_default()
        .to_string()
}
