//! Number formatting helpers for presentation.

use serde::Deserialize;

use crate::value::{format_number, Value};

/// Unit appended by [`convert_to_unit`] callers that have no preference.
pub const DEFAULT_UNIT: &str = "px";

/// Converts a number (or numeric string) into a CSS length.
///
/// `null`, `undefined` and the empty string give `None`, as do infinite
/// numbers. Values that do not read as a number are returned unchanged as
/// strings, so `"3vw"` stays `"3vw"`.
///
/// # Examples
///
/// ```
/// use toolbelt::{convert_to_unit, Value, DEFAULT_UNIT};
///
/// assert_eq!(convert_to_unit(&Value::from(3.14), DEFAULT_UNIT).as_deref(), Some("3.14px"));
/// assert_eq!(convert_to_unit(&Value::from(3), "em").as_deref(), Some("3em"));
/// assert_eq!(convert_to_unit(&Value::from("3vw"), DEFAULT_UNIT).as_deref(), Some("3vw"));
/// assert_eq!(convert_to_unit(&Value::Null, DEFAULT_UNIT), None);
/// ```
pub fn convert_to_unit(value: &Value, unit: &str) -> Option<String> {
    let number = match value {
        Value::Undefined | Value::Null => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::Number(n) => *n,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => parse_number(s),
        _ => f64::NAN,
    };

    if number.is_nan() {
        return Some(display(value));
    }
    if number.is_infinite() {
        return None;
    }
    Some(format!("{}{unit}", format_number(number)))
}

/// String form used when a value does not coerce to a number.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => format!("{other:?}"),
    }
}

/// Unary-plus style string to number coercion: surrounding whitespace is
/// ignored, blank strings are zero, anything else must be a complete decimal
/// literal, a hex literal or `Infinity`.
fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
    }

    let is_decimal = unsigned
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal || !unsigned.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map_or(f64::NAN, |n| sign * n)
}

/// Divisor family for [`human_readable_file_size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u32")]
pub enum FileSizeBase {
    /// Powers of 1000 with SI prefixes (`kB`, `MB`, `GB`).
    #[default]
    Decimal,
    /// Powers of 1024 with IEC prefixes (`KiB`, `MiB`, `GiB`).
    Binary,
}

impl FileSizeBase {
    pub fn divisor(self) -> f64 {
        match self {
            FileSizeBase::Decimal => 1000.0,
            FileSizeBase::Binary => 1024.0,
        }
    }

    fn prefixes(self) -> [&'static str; 3] {
        match self {
            FileSizeBase::Decimal => ["k", "M", "G"],
            FileSizeBase::Binary => ["Ki", "Mi", "Gi"],
        }
    }
}

impl TryFrom<u32> for FileSizeBase {
    type Error = String;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        match base {
            1000 => Ok(FileSizeBase::Decimal),
            1024 => Ok(FileSizeBase::Binary),
            other => Err(format!("unsupported file size base {other}, expected 1000 or 1024")),
        }
    }
}

/// Formats a byte count for humans, up to gigabytes.
///
/// # Examples
///
/// ```
/// use toolbelt::{human_readable_file_size, FileSizeBase};
///
/// assert_eq!(human_readable_file_size(512.0, FileSizeBase::Decimal), "512 B");
/// assert_eq!(human_readable_file_size(4096.0, FileSizeBase::Binary), "4.0 KiB");
/// assert_eq!(human_readable_file_size(2_000_000.0, FileSizeBase::Decimal), "2.0 MB");
/// ```
pub fn human_readable_file_size(bytes: f64, base: FileSizeBase) -> String {
    let divisor = base.divisor();
    if bytes < divisor {
        return format!("{} B", format_number(bytes));
    }

    let prefixes = base.prefixes();
    let mut size = bytes;
    let mut unit = 0;
    size /= divisor;
    while size.abs() >= divisor && unit < prefixes.len() - 1 {
        size /= divisor;
        unit += 1;
    }

    format!("{size:.1} {}B", prefixes[unit])
}
