//! Shared fixtures for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use maketext::cldr::{CldrBundle, CldrFormats, DatetimeInfo, MiscInfo};
use maketext::{CldrSource, Locale};

/// A trimmed Russian CLDR bundle in the generated JSON shape, including
/// keys the formatters ignore.
pub const RU_CLDR: &str = r##"{
    "locale": "ru",
    "datetime_info": {
        "territory": null,
        "cldr_version": "1.7.1",
        "month_format_wide": ["января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября", "октября", "ноября", "декабря"],
        "month_format_abbreviated": ["янв.", "февр.", "марта", "апр.", "мая", "июня", "июля", "авг.", "сент.", "окт.", "нояб.", "дек."],
        "month_stand_alone_wide": ["Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь"],
        "day_format_wide": ["понедельник", "вторник", "среда", "четверг", "пятница", "суббота", "воскресенье"],
        "day_format_abbreviated": ["пн", "вт", "ср", "чт", "пт", "сб", "вс"],
        "am_pm_abbreviated": ["AM", "PM"],
        "era_abbreviated": ["до н.э.", "н.э."],
        "first_day_of_week": "1",
        "prefers_24_hour_time": 1,
        "date_format_long": "d MMMM y 'г'.",
        "date_format_short": "dd.MM.yy",
        "time_format_short": "H:mm",
        "datetime_format": "{1} {0}",
        "format_for": { "yM": "yyyy-M" }
    },
    "misc_info": {
        "delimiters": {
            "quotation_start": "«",
            "quotation_end": "»",
            "alternate_quotation_start": "„",
            "alternate_quotation_end": "“"
        },
        "orientation": { "lines": "top-to-bottom", "characters": "left-to-right" },
        "posix": { "nostr": "нет:н", "yesstr": "да:д" },
        "plural_forms": {
            "category_list": ["one", "few", "many", "other"],
            "category_rules_function": null
        },
        "cldr_formats": {
            "_decimal_format_decimal": ",",
            "_decimal_format_group": "\u00a0",
            "decimal": "#,##0.###",
            "percent": "#,##0 %",
            "ellipsis": { "medial": "{0}…{1}", "final": "{0}…", "initial": "…{0}" },
            "list": { "2": "{0} и {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} и {1}" },
            "list_or": { "2": "{0} или {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} или {1}" }
        },
        "fallback": []
    }
}"##;

pub fn ru_source() -> CldrSource {
    CldrSource::from_json_str(RU_CLDR).unwrap()
}

pub fn ru_locale() -> Locale {
    Locale::from_cldr("ru", ru_source())
}

/// English locale with an empty datetime table, so every name and pattern
/// comes from the English fallbacks.
pub fn english_calendar() -> Locale {
    let mut locale = Locale::new();
    locale.set_cldr(CldrBundle {
        datetime: Some(DatetimeInfo::default()),
        misc_info: None,
    });
    locale
}

/// English locale whose number, list, quote and ellipsis formats come
/// from `formats`.
pub fn with_formats(formats: CldrFormats) -> Locale {
    let mut locale = Locale::new();
    locale.set_cldr(CldrBundle {
        datetime: None,
        misc_info: Some(MiscInfo {
            cldr_formats: Some(formats),
            ..MiscInfo::default()
        }),
    });
    locale
}

/// Saturday, 9 March 2024, 14:05:07 UTC.
pub fn sample_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
}
