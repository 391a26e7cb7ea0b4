//! Type guards and predicates over [`Value`]s.
//!
//! The filter-style helpers ([`strip_nullish`], [`strip_null`],
//! [`is_truthy`]) take `&&Value` so they plug straight into
//! `Iterator::filter`.

use crate::value::Value;

/// Checks if a value is empty.
///
/// Numbers and booleans are never empty. `null` and `undefined` are. Strings
/// are empty when they have no chars, arrays when they have no items and
/// plain objects when they have no enumerable keys. Dates, regular
/// expressions and the other opaque types are never empty.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{is_empty, Value};
///
/// assert!(is_empty(&Value::from(json!({}))));
/// assert!(is_empty(&Value::from("")));
/// assert!(!is_empty(&Value::from(0)));
/// assert!(!is_empty(&Value::from("0")));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(array) => array.borrow().is_empty(),
        Value::Object(object) => object.borrow().is_empty(),
        _ => false,
    }
}

/// JavaScript truthiness.
pub fn is_truthy(value: &&Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Keeps everything but `null` and `undefined`.
pub fn strip_nullish(value: &&Value) -> bool {
    !value.is_nullish()
}

/// Keeps everything but `null`.
pub fn strip_null(value: &&Value) -> bool {
    !value.is_null()
}

pub fn is_undefined(value: &Value) -> bool {
    value.is_undefined()
}

pub fn is_defined(value: &Value) -> bool {
    !value.is_undefined()
}

/// `null` or `undefined`.
pub fn is_unset(value: &Value) -> bool {
    value.is_nullish()
}

pub fn is_set(value: &Value) -> bool {
    !is_unset(value)
}

pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// True for plain objects only, like `toString.call(v) === '[object Object]'`.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}
