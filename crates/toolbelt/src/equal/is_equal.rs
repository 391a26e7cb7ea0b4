use std::collections::HashSet;

use serde::Deserialize;

use crate::value::Value;

/// Options for [`is_equal`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EqualOptions {
    /// Recurse into nested containers instead of comparing them by
    /// reference. Default is `false`.
    pub deep: bool,
    /// Keys that are always compared by strict equality before anything
    /// else, hidden properties included.
    pub explicit: Vec<String>,
}

impl EqualOptions {
    pub fn deep() -> Self {
        Self {
            deep: true,
            ..Self::default()
        }
    }

    pub fn with_explicit<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.explicit = keys.into_iter().map(Into::into).collect();
        self
    }
}

/// Compares two values structurally.
///
/// Strictly equal values (same scalar, or the same allocation) are equal.
/// `Date`, `Map` and `Set` values are otherwise never equal to anything,
/// not even a distinct instance holding the same contents. Every other
/// object-typed pair is equal when both sides have the same own keys and
/// every pair of values is strictly equal, or recursively equal with
/// [`EqualOptions::deep`]. Arrays and binary values expose their indices
/// as keys, so `[1, 2]` equals `{"0": 1, "1": 2}`. Regular expressions
/// have no own keys and are all equal to each other.
///
/// A pair of containers already under comparison higher up the stack is
/// assumed equal, which keeps cyclic inputs from recursing forever.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{is_equal, EqualOptions, Value};
///
/// let a = Value::from(json!({"x": {"a": 1}}));
/// let b = Value::from(json!({"x": {"a": 1}}));
///
/// assert!(!is_equal(&a, &b, &EqualOptions::default()));
/// assert!(is_equal(&a, &b, &EqualOptions::deep()));
/// ```
pub fn is_equal(a: &Value, b: &Value, options: &EqualOptions) -> bool {
    let mut visiting = HashSet::new();
    compare(a, b, options, &mut visiting)
}

/// [`is_equal`] with `deep` enabled and no explicit keys.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{deep_equal, Value};
///
/// let a = Value::from(json!([1, {"x": 1, "y": 2}]));
/// let b = Value::from(json!([1.0, {"y": 2, "x": 1}]));
/// let c = Value::from(json!([1, {"x": 1, "y": null}]));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    is_equal(a, b, &EqualOptions::deep())
}

fn compare(a: &Value, b: &Value, options: &EqualOptions, visiting: &mut HashSet<(usize, usize)>) -> bool {
    if a.strict_equal(b) {
        return true;
    }

    let (Some(addr_a), Some(addr_b)) = (a.addr(), b.addr()) else {
        return false;
    };

    if is_never_equal(a) || is_never_equal(b) {
        return false;
    }

    if !visiting.insert((addr_a, addr_b)) {
        log::trace!("revisiting {} pair while comparing, assuming equal", a.kind());
        return true;
    }

    let keys = a.own_keys();
    if keys.len() != b.own_keys().len() {
        return false;
    }

    for key in &options.explicit {
        let left = a.property(key);
        let right = b.property(key);
        if left.is_none() && right.is_none() {
            continue;
        }
        let left = left.unwrap_or_default();
        let right = right.unwrap_or_default();
        if !left.strict_equal(&right) {
            return false;
        }
    }

    for key in &keys {
        let Some(val_b) = b.property(key) else {
            return false;
        };
        let val_a = a.property(key).unwrap_or_default();
        let equal = if options.deep {
            compare(&val_a, &val_b, options, visiting)
        } else {
            val_a.strict_equal(&val_b)
        };
        if !equal {
            return false;
        }
    }

    true
}

/// Types only equal to themselves, whatever their contents.
fn is_never_equal(value: &Value) -> bool {
    matches!(value, Value::Date(_) | Value::Map(_) | Value::Set(_))
}
