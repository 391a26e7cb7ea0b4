use serde::Deserialize;

use crate::value::{Object, Value};

/// Options for [`extend_object`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtendOptions {
    /// Append additional arrays to original arrays instead of replacing
    /// them. Default is `false`.
    pub extend_arrays: bool,
    /// Treat undefined additional values as absent, so they neither delete
    /// nor overwrite. Default is `false`.
    pub ignore_undefined: bool,
}

/// Recursively merges `additional` into `original`, returning a new value.
///
/// * `Null` as `additional` clears everything and yields `Null`.
/// * A string as `additional` replaces everything and is returned as is.
/// * An object is merged key by key: nested plain objects recurse, an
///   undefined value deletes the key (unless
///   [`ExtendOptions::ignore_undefined`] is set), arrays are replaced or,
///   with [`ExtendOptions::extend_arrays`], concatenated. Keys only present
///   in `additional` are appended when defined.
///
/// Any other `additional` value has no keys and yields a copy of
/// `original`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{extend_object, ExtendOptions, Object, Value};
///
/// let original: Object = [("a", Value::from(1)), ("b", Value::from("foo"))].into_iter().collect();
/// let additional = Value::object([("a", Value::Undefined), ("b", Value::from("bar"))]);
///
/// let options = ExtendOptions { ignore_undefined: true, ..Default::default() };
/// let extended = extend_object(&original, &additional, Some(options));
/// assert_eq!(extended.to_json().unwrap(), json!({"a": 1, "b": "bar"}));
///
/// let extended = extend_object(&original, &additional, None);
/// assert_eq!(extended.to_json().unwrap(), json!({"b": "bar"}));
/// ```
pub fn extend_object(original: &Object, additional: &Value, options: Option<ExtendOptions>) -> Value {
    let opts = options.unwrap_or_default();

    match additional {
        Value::Null => {
            log::trace!("extend_object: null additional clears the original");
            Value::Null
        }
        Value::String(s) => {
            log::trace!("extend_object: string additional replaces the original");
            Value::String(s.clone())
        }
        Value::Object(additional) => Value::from(extend(original, &additional.borrow(), opts)),
        _ => Value::from(extend(original, &Object::new(), opts)),
    }
}

fn extend(original: &Object, additional: &Object, opts: ExtendOptions) -> Object {
    let mut merged = Object::new();

    for (key, original_value) in original {
        let claimed = additional
            .get(key)
            .filter(|value| !(opts.ignore_undefined && value.is_undefined()));

        let Some(additional_value) = claimed else {
            merged.insert(key.clone(), original_value.clone());
            continue;
        };

        let value = match (original_value, additional_value) {
            (Value::Array(first), Value::Array(second)) if opts.extend_arrays => {
                let items: Vec<Value> = first
                    .borrow()
                    .iter()
                    .chain(second.borrow().iter())
                    .cloned()
                    .collect();
                Value::from(items)
            }
            (_, Value::Undefined) => continue,
            (Value::Object(first), Value::Object(second)) => {
                Value::from(extend(&first.borrow(), &second.borrow(), opts))
            }
            _ => additional_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    for (key, additional_value) in additional {
        if !merged.has_own(key) && !additional_value.is_undefined() {
            merged.insert(key.clone(), additional_value.clone());
        }
    }

    merged
}
