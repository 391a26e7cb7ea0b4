//! Object utilities: cloning, merging, key selection and path lookup.

mod clone;
mod extend;
mod merge;

use regex::Regex;

use crate::value::{Object, Value};

pub use clone::deep_clone;
pub use extend::{extend_object, ExtendOptions};
pub use merge::merge_deep;

/// A key selector for [`pick_props_regex`] and [`omit_props_regex`].
#[derive(Debug, Clone)]
pub enum KeyPattern {
    Key(String),
    Regex(Regex),
}

impl KeyPattern {
    fn regex(&self) -> Option<&Regex> {
        match self {
            KeyPattern::Regex(regex) => Some(regex),
            KeyPattern::Key(_) => None,
        }
    }
}

impl From<&str> for KeyPattern {
    fn from(key: &str) -> Self {
        KeyPattern::Key(key.to_string())
    }
}

impl From<String> for KeyPattern {
    fn from(key: String) -> Self {
        KeyPattern::Key(key)
    }
}

impl From<Regex> for KeyPattern {
    fn from(regex: Regex) -> Self {
        KeyPattern::Regex(regex)
    }
}

/// Enumerable own keys, like `Object.keys`.
pub fn object_keys(value: &Value) -> Vec<String> {
    value.own_keys()
}

/// Enumerable own entries, like `Object.entries`.
pub fn object_entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(object) => object
            .borrow()
            .iter()
            .map(|(key, item)| (key.clone(), item.clone()))
            .collect(),
        Value::Array(array) => array
            .borrow()
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect(),
        Value::Binary(bytes) => bytes
            .iter()
            .enumerate()
            .map(|(i, byte)| (i.to_string(), Value::Number(f64::from(*byte))))
            .collect(),
        _ => Vec::new(),
    }
}

/// Checks if the given property exists on the value. Hidden properties
/// count; only objects, arrays and binary values have properties.
pub fn has_own(value: &Value, key: &str) -> bool {
    value.property(key).is_some()
}

/// True for plain objects, false for arrays and every opaque type.
pub fn is_pojo(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Gets a nested value through a dot separated path.
///
/// Returns `Null` when the root is not an object or array, when a segment
/// does not resolve, or when the path runs into a value that cannot be
/// descended into. Array indices are plain segments.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{get_prop, Value};
///
/// let doc = Value::from(json!({"a": {"list": ["foo", "bar"]}}));
///
/// assert_eq!(get_prop(&doc, "a.list.1").as_str(), Some("bar"));
/// assert!(get_prop(&doc, "a.list.1.x").is_null());
/// assert!(get_prop(&Value::from("foobar"), "a").is_null());
/// ```
pub fn get_prop(value: &Value, path: &str) -> Value {
    if !matches!(value, Value::Object(_) | Value::Array(_)) {
        return Value::Null;
    }

    let mut current = value.clone();
    for segment in path.split('.') {
        if !matches!(current, Value::Object(_) | Value::Array(_)) {
            return Value::Null;
        }
        match current.property(segment) {
            Some(next) => current = next,
            None => return Value::Null,
        }
    }
    current
}

/// Extracts the given keys. Keys missing from `object` come back as
/// `Undefined`.
pub fn pick_props<S: AsRef<str>>(object: &Object, keys: &[S]) -> Object {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            (key, object.get(key).cloned().unwrap_or_default())
        })
        .collect()
}

/// Like [`pick_props`], with regular expressions also selecting every
/// enumerable key they match.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use serde_json::json;
/// use toolbelt::{pick_props_regex, KeyPattern, Value};
///
/// let value = Value::from(json!({"foo": 123, "faa": 456, "bar": "bar", "boz": "biz"}));
/// let picked = pick_props_regex(
///     &value.as_object().unwrap().borrow(),
///     &["faa".into(), KeyPattern::from(Regex::new("^[bf]o").unwrap())],
/// );
/// assert_eq!(Value::from(picked).to_json().unwrap(), json!({"faa": 456, "foo": 123, "boz": "biz"}));
/// ```
pub fn pick_props_regex(object: &Object, include: &[KeyPattern]) -> Object {
    let mut clean = Object::new();

    for pattern in include {
        if let KeyPattern::Key(key) = pattern {
            clean.insert(key.clone(), object.get(key).cloned().unwrap_or_default());
        }
    }

    let expressions: Vec<&Regex> = include.iter().filter_map(KeyPattern::regex).collect();
    for (key, value) in object {
        if expressions.iter().any(|regex| regex.is_match(key)) {
            clean.insert(key.clone(), value.clone());
        }
    }

    clean
}

/// Copies every enumerable entry except the given keys.
pub fn omit_props<S: AsRef<str>>(object: &Object, keys: &[S]) -> Object {
    object
        .iter()
        .filter(|(key, _)| !keys.iter().any(|omitted| omitted.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copies every enumerable entry that neither equals a literal key nor
/// matches a regular expression.
pub fn omit_props_regex(object: &Object, remove: &[KeyPattern]) -> Object {
    object
        .iter()
        .filter(|(key, _)| {
            !remove.iter().any(|pattern| match pattern {
                KeyPattern::Key(omitted) => omitted == *key,
                KeyPattern::Regex(regex) => regex.is_match(key),
            })
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copies the top level of an array or plain object; nested values are
/// shared. Anything else is returned as is.
pub fn shallow_clone(value: &Value) -> Value {
    match value {
        Value::Array(array) => Value::from(array.borrow().clone()),
        Value::Object(object) => {
            let copy: Object = object
                .borrow()
                .iter()
                .map(|(key, item)| (key.clone(), item.clone()))
                .collect();
            Value::from(copy)
        }
        _ => value.clone(),
    }
}
