//! Integration tests for CLDR date and time formatting.

mod common;

use chrono::{Datelike, FixedOffset, TimeZone, Utc};
use maketext::cldr::{CldrBundle, DatetimeInfo};
use maketext::{DateFormat, Locale, Value, args};

fn hours_east(hours: i32, minutes: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600 + minutes * 60).unwrap()
}

// =============================================================================
// Patterns
// =============================================================================

#[test]
fn test_field_matrix() {
    let locale = common::english_calendar();
    let when = common::sample_instant();
    let patterns = [
        "y", "yy", "yyyy", "M", "MM", "MMM", "MMMM", "MMMMM", "d", "dd", "E", "EEEE", "EEEEE",
        "h", "hh", "H", "HH", "m", "mm", "s", "ss", "a", "z", "G", "GGGG",
    ];
    let rendered: Vec<String> = patterns
        .iter()
        .map(|pattern| format!("{pattern} => {}", locale.datetime(when, *pattern)))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    y => 2024
    yy => 24
    yyyy => 2024
    M => 3
    MM => 03
    MMM => Mar
    MMMM => March
    MMMMM => M
    d => 9
    dd => 09
    E => Sat
    EEEE => Saturday
    EEEEE => S
    h => 2
    hh => 02
    H => 14
    HH => 14
    m => 5
    mm => 05
    s => 7
    ss => 07
    a => PM
    z => UTC
    G => AD
    GGGG => Anno Domini
    ");
}

#[test]
fn test_literal_patterns() {
    let locale = common::english_calendar();
    let when = common::sample_instant();
    assert_eq!(
        locale.datetime(when, "yyyy-MM-dd HH:mm:ss"),
        "2024-03-09 14:05:07"
    );
    assert_eq!(locale.datetime(when, "h 'o''clock' a"), "2 o'clock PM");
    assert_eq!(locale.datetime(when, "EEE c LLL MMMMM"), "Sat Sat Mar M");
    assert_eq!(locale.datetime(when, "G GGGG GGGGG"), "AD Anno Domini A");
}

#[test]
fn test_unknown_fields_pass_through() {
    let locale = common::english_calendar();
    assert_eq!(
        locale.datetime(common::sample_instant(), "QQQ y"),
        "QQQ 2024"
    );
}

#[test]
fn test_twelve_hour_clock_edges() {
    let locale = common::english_calendar();
    let noon = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
    let after_midnight = Utc.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();
    assert_eq!(locale.datetime(noon, "h:mm a"), "12:00 PM");
    assert_eq!(locale.datetime(after_midnight, "h:mm a"), "12:30 AM");
}

// =============================================================================
// Named formats
// =============================================================================

#[test]
fn test_named_formats() {
    let locale = common::english_calendar();
    let when = common::sample_instant();
    assert_eq!(locale.datetime(when, DateFormat::Default), "March 9, 2024");
    assert_eq!(locale.datetime(when, ""), "March 9, 2024");
    assert_eq!(locale.datetime(when, "date_format_short"), "3/9/24");
    assert_eq!(
        locale.datetime(when, "date_format_full"),
        "Saturday, March 9, 2024"
    );
    assert_eq!(locale.datetime(when, "date_format_bogus"), "March 9, 2024");
}

#[test]
fn test_date_time_pair() {
    let locale = common::english_calendar();
    assert_eq!(
        locale.datetime(common::sample_instant(), ("medium", "short")),
        "Mar 9, 2024 2:05 PM"
    );
}

#[test]
fn test_locale_patterns_override_english() {
    let mut info = DatetimeInfo::default();
    info.set_pattern("date_format_short", "dd/MM/y");
    let mut locale = Locale::new();
    locale.set_cldr(CldrBundle {
        datetime: Some(info),
        misc_info: None,
    });
    assert_eq!(
        locale.datetime(common::sample_instant(), "date_format_short"),
        "09/03/2024"
    );
}

#[test]
fn test_russian_calendar() {
    let locale = common::ru_locale();
    let when = common::sample_instant();
    assert_eq!(locale.datetime(when, DateFormat::Default), "9 марта 2024 г.");
    assert_eq!(locale.datetime(when, ("short", "short")), "09.03.24 14:05");
    assert_eq!(locale.datetime(when, "LLLL"), "Март");
    assert_eq!(locale.datetime(when, "EEEE"), "суббота");
    assert_eq!(locale.datetime(when, "G"), "н.э.");
}

// =============================================================================
// Inputs
// =============================================================================

#[test]
fn test_epoch_seconds() {
    let locale = common::english_calendar();
    assert_eq!(locale.datetime(0, "yyyy-MM-dd"), "1970-01-01");
    assert_eq!(
        locale.datetime(86400.5, "yyyy-MM-dd HH:mm:ss"),
        "1970-01-02 00:00:00"
    );
    assert_eq!(locale.datetime("86400", "yyyy-MM-dd"), "1970-01-02");
}

#[test]
fn test_invalid_dates() {
    let locale = common::english_calendar();
    assert_eq!(locale.datetime("not a date", "yyyy"), "Invalid Date");
    assert_eq!(locale.datetime(true, "yyyy"), "Invalid Date");
}

#[test]
fn test_null_means_now() {
    let locale = common::english_calendar();
    let year = Utc::now().year().to_string();
    assert_eq!(locale.datetime(Value::Null, "yyyy"), year);
    assert_eq!(locale.datetime("", "yyyy"), year);
    assert_eq!(locale.datetime(false, "yyyy"), year);
    assert_eq!(locale.makethis("[datetime,,yyyy]", &[]).unwrap(), year);
    assert_eq!(locale.makethis("[datetime,_1,yyyy]", &args![""]).unwrap(), year);
    assert_eq!(locale.datetime(0, "yyyy"), "1970");
}

#[test]
fn test_without_calendar_data() {
    let locale = Locale::new();
    assert_eq!(
        locale.datetime(common::sample_instant(), "yyyy"),
        "2024-03-09 14:05:07 UTC"
    );
}

#[test]
fn test_datetime_bracket_function() {
    let locale = common::english_calendar();
    let when = common::sample_instant();
    assert_eq!(
        locale.makethis("[datetime,_1,yyyy]", &args![when]).unwrap(),
        "2024"
    );
    assert_eq!(
        locale.makethis("[datetime,_1]", &args![when]).unwrap(),
        "March 9, 2024"
    );
    assert_eq!(
        locale
            .makethis("[datetime,_1,_2]", &args![when, vec!["short", "short"]])
            .unwrap(),
        "3/9/24 2:05 PM"
    );
}

// =============================================================================
// Local time
// =============================================================================

#[test]
fn test_fixed_offsets() {
    let locale = common::english_calendar();
    let when = common::sample_instant();
    assert_eq!(
        locale.local_datetime_with_offset(when, "HH:mm zzzz", hours_east(5, 30)),
        "19:35 GMT+0530"
    );
    assert_eq!(
        locale.local_datetime_with_offset(when, "HH:mm z", hours_east(-3, 0)),
        "11:05 GMT-0300"
    );
    assert_eq!(
        locale.local_datetime_with_offset(when, "HH:mm", hours_east(1, 0)),
        "15:05"
    );
}

#[test]
fn test_configured_offset() {
    let mut locale = common::english_calendar();
    locale.set_utc_offset(Some(hours_east(1, 0)));
    let when = common::sample_instant();
    assert_eq!(locale.local_datetime(when, "HH:mm z"), "15:05 GMT+0100");
    assert_eq!(
        locale.makethis("[local_datetime,_1,HH:mm]", &args![when]).unwrap(),
        "15:05"
    );
}

// =============================================================================
// First day of week
// =============================================================================

#[test]
fn test_first_day_of_week() {
    assert_eq!(Locale::new().get_first_day_of_week(), 0);
    assert_eq!(common::ru_locale().get_first_day_of_week(), 2);

    for (day, expected) in [(6, 7), (7, 0), (0, 1)] {
        let mut locale = Locale::new();
        locale.set_cldr(CldrBundle {
            datetime: Some(DatetimeInfo {
                first_day_of_week: Some(day),
                ..DatetimeInfo::default()
            }),
            misc_info: None,
        });
        assert_eq!(locale.get_first_day_of_week(), expected, "day {day}");
    }
}
