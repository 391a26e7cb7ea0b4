use crate::value::{Object, Value};

/// Recursively merges `target` into a copy of `source`.
///
/// Neither input is modified. When both sides hold plain objects under the
/// same key they are merged; in every other case the target value replaces
/// the source value, so arrays are never merged element-wise. Source keys
/// come first in the result, followed by keys only the target has.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{merge_deep, Value};
///
/// let source = Value::from(json!({"a": {"b": "foo"}, "list": ["foo"]}));
/// let target = Value::from(json!({"a": {"c": "bar"}, "list": ["bar"]}));
///
/// let merged = merge_deep(
///     &source.as_object().unwrap().borrow(),
///     &target.as_object().unwrap().borrow(),
/// );
/// assert_eq!(
///     Value::from(merged).to_json().unwrap(),
///     json!({"a": {"b": "foo", "c": "bar"}, "list": ["bar"]})
/// );
/// ```
pub fn merge_deep(source: &Object, target: &Object) -> Object {
    let mut merged: Object = source
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for (key, target_value) in target {
        let value = match (source.get(key), target_value) {
            (Some(Value::Object(source_child)), Value::Object(target_child)) => {
                Value::from(merge_deep(&source_child.borrow(), &target_child.borrow()))
            }
            _ => target_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    merged
}
