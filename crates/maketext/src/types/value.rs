use std::fmt;

use chrono::{DateTime, Utc};

/// A runtime value passed as a positional argument to maketext.
///
/// Values render the way a UI string expects when interpolated: whole
/// numbers without a fractional part, lists joined with commas, and
/// `Null` as `null`.
///
/// # Example
///
/// ```
/// use maketext::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// let files: Value = vec!["a.txt", "b.txt"].into();
/// assert_eq!(files.to_string(), "a.txt,b.txt");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Null,

    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    String(String),

    /// A list of values, used by the list and join functions.
    List(Vec<Value>),

    /// A point in time, used by the datetime functions.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Get this value as a float, if it is numeric or a numeric string.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.trim().parse().ok(),
            Value::Null | Value::Bool(_) | Value::List(_) | Value::DateTime(_) => None,
        }
    }

    /// Get this value as a non-negative count, truncating fractions.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Number(n) => usize::try_from(*n).ok(),
            _ => self
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as usize),
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value counts as true in a boolean bracket function.
    ///
    /// Zero, NaN, the empty string, `false` and `Null` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::DateTime(_) => true,
        }
    }

    /// The decimal digits of this value, for number formatting.
    ///
    /// Numeric strings are passed through as written so that formatting
    /// does not lose precision to binary floating point. Returns `None`
    /// for non-numeric values and non-finite floats.
    pub(crate) fn numeric_repr(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(n.to_string()),
            Value::Float(f) if f.is_finite() => Some(number_to_string(*f)),
            Value::String(s) => {
                let trimmed = s.trim();
                let parsed: f64 = trimmed.parse().ok()?;
                parsed.is_finite().then(|| trimmed.to_string())
            }
            Value::Float(_) | Value::Null | Value::Bool(_) | Value::List(_) | Value::DateTime(_) => {
                None
            }
        }
    }
}

/// Render a float the way a browser would: shortest round-trip digits,
/// exponent form outside `[1e-6, 1e21)`.
pub(crate) fn number_to_string(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }
    let scientific = format!("{f:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{}", number_to_string(*x)),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc2822()),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}
