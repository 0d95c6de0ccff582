//! English data used when a locale carries no CLDR tables.

pub(crate) const MONTHS_WIDE: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const MONTHS_ABBREVIATED: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) const MONTHS_NARROW: [&str; 12] =
    ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

pub(crate) const DAYS_WIDE: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub(crate) const DAYS_ABBREVIATED: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(crate) const DAYS_NARROW: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

pub(crate) const AM_PM: [&str; 2] = ["AM", "PM"];

pub(crate) const ERAS_WIDE: [&str; 2] = ["Before Christ", "Anno Domini"];

pub(crate) const ERAS_ABBREVIATED: [&str; 2] = ["BC", "AD"];

pub(crate) const ERAS_NARROW: [&str; 2] = ["B", "A"];

pub(crate) const DECIMAL_PATTERN: &str = "#,##0.###";
pub(crate) const GROUP_SEPARATOR: &str = ",";
pub(crate) const DECIMAL_SEPARATOR: &str = ".";

pub(crate) const LIST_AND: ListDefaults = ListDefaults {
    two: "{0} and {1}",
    start: "{0}, {1}",
    middle: "{0}, {1}",
    end: "{0}, and {1}",
};

pub(crate) const LIST_OR: ListDefaults = ListDefaults {
    two: "{0} or {1}",
    start: "{0}, {1}",
    middle: "{0}, {1}",
    end: "{0}, or {1}",
};

pub(crate) struct ListDefaults {
    pub two: &'static str,
    pub start: &'static str,
    pub middle: &'static str,
    pub end: &'static str,
}

pub(crate) const ELLIPSIS_INITIAL: &str = "…{0}";
pub(crate) const ELLIPSIS_MEDIAL: &str = "{0}…{1}";
pub(crate) const ELLIPSIS_FINAL: &str = "{0}…";

pub(crate) const QUOTE_START: &str = "“";
pub(crate) const QUOTE_END: &str = "”";
pub(crate) const ALT_QUOTE_START: &str = "‘";
pub(crate) const ALT_QUOTE_END: &str = "’";

pub(crate) const DATETIME_GLUE: &str = "{1} {0}";

/// English CLDR date and time patterns by name.
pub(crate) fn pattern(name: &str) -> Option<&'static str> {
    Some(match name {
        "date_format_full" => "EEEE, MMMM d, y",
        "date_format_long" => "MMMM d, y",
        "date_format_medium" => "MMM d, y",
        "date_format_short" => "M/d/yy",
        "date_format_default" => "MMM d, y",
        "time_format_full" => "h:mm:ss a zzzz",
        "time_format_long" => "h:mm:ss a z",
        "time_format_medium" => "h:mm:ss a",
        "time_format_short" => "h:mm a",
        "time_format_default" => "h:mm:ss a",
        "datetime_format" => DATETIME_GLUE,
        "datetime_format_full" => "EEEE, MMMM d, y h:mm:ss a zzzz",
        "datetime_format_long" => "MMMM d, y h:mm:ss a z",
        "datetime_format_medium" => "MMM d, y h:mm:ss a",
        "datetime_format_short" => "M/d/yy h:mm a",
        "datetime_format_default" => "MMM d, y h:mm:ss a",
        _ => return None,
    })
}
