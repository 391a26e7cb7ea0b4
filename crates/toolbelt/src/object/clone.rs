use crate::value::{Object, Value};

/// Creates a deep clone of a value.
///
/// Arrays and objects are rebuilt recursively, so the result shares no
/// container with the input. `RegExp`, `Date`, `Map`, `Set` and binary values
/// are opaque and come back as the same reference. Only enumerable entries
/// are copied, except for the `explicit` keys: each one the original object
/// owns (hidden or not) is defined on the clone as a hidden property holding
/// the original's value. This applies at every depth.
///
/// Cyclic input recurses until the stack is exhausted.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{deep_clone, deep_equal, Value};
///
/// let original = Value::from(json!({"foo": [1, 2, 3]}));
/// let cloned = deep_clone(&original, &[]);
///
/// assert!(deep_equal(&original, &cloned));
/// assert!(!original.ptr_eq(&cloned));
/// ```
pub fn deep_clone(value: &Value, explicit: &[&str]) -> Value {
    match value {
        Value::Array(array) => {
            let items: Vec<Value> = array
                .borrow()
                .iter()
                .map(|item| clone_child(item, explicit))
                .collect();
            Value::from(items)
        }
        Value::Object(object) => {
            let original = object.borrow();
            let mut cloned: Object = original
                .iter()
                .map(|(key, item)| (key.clone(), clone_child(item, explicit)))
                .collect();
            for key in explicit {
                if let Some(hidden) = original.get(key) {
                    cloned.define_hidden(*key, hidden.clone());
                }
            }
            Value::from(cloned)
        }
        // Scalars copy by value, opaque types keep their identity
        _ => value.clone(),
    }
}

fn clone_child(value: &Value, explicit: &[&str]) -> Value {
    if value.is_object_typed() {
        deep_clone(value, explicit)
    } else {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equal::deep_equal;
    use chrono::Utc;
    use regex::Regex;
    use serde_json::json;

    fn hidden(entries: &[(&str, Value)], key: &str, value: Value) -> Value {
        let mut object: Object = entries.iter().cloned().collect();
        object.define_hidden(key, value);
        Value::from(object)
    }

    #[test]
    fn test_clone_scalars() {
        assert!(deep_clone(&Value::Null, &[]).is_null());
        assert_eq!(deep_clone(&Value::from(42), &[]).as_f64(), Some(42.0));
        assert_eq!(deep_clone(&Value::from("hello"), &[]).as_str(), Some("hello"));
    }

    #[test]
    fn test_clone_array_is_new() {
        let arr = Value::array(["foo"]);
        let cloned = deep_clone(&arr, &[]);
        assert!(!cloned.ptr_eq(&arr));
        assert_eq!(cloned.to_json().unwrap(), json!(["foo"]));
    }

    #[test]
    fn test_clone_nested_arrays() {
        let arr = Value::array(["foo"]);
        let bar = Value::array([arr.clone()]);
        let cloned = deep_clone(&bar, &[]);
        let first = cloned.property("0").unwrap();
        assert!(!first.ptr_eq(&arr));
        assert!(deep_equal(&first, &arr));
    }

    #[test]
    fn test_clone_nested_objects() {
        let x = Value::object([("a", "b")]);
        let z = Value::object([("g", Value::from("y")), ("x", x.clone())]);
        let cloned = deep_clone(&z, &[]);

        assert_eq!(cloned.to_json().unwrap(), json!({"g": "y", "x": {"a": "b"}}));
        assert!(!cloned.ptr_eq(&z));
        assert!(!cloned.property("x").unwrap().ptr_eq(&x));
    }

    #[test]
    fn test_skips_cloning_opaque_values() {
        let regex = Value::regex(Regex::new("^a").unwrap());
        let date = Value::date(Utc::now());
        let map = Value::map([]);
        let set = Value::set([]);
        let file = Value::binary(vec![1, 2, 3]);
        let original = Value::object([
            ("regex", regex.clone()),
            ("date", date.clone()),
            ("map", map.clone()),
            ("set", set.clone()),
            ("file", file.clone()),
        ]);
        let cloned = deep_clone(&original, &[]);

        assert!(cloned.property("regex").unwrap().ptr_eq(&regex));
        assert!(cloned.property("date").unwrap().ptr_eq(&date));
        assert!(cloned.property("map").unwrap().ptr_eq(&map));
        assert!(cloned.property("set").unwrap().ptr_eq(&set));
        assert!(cloned.property("file").unwrap().ptr_eq(&file));
    }

    #[test]
    fn test_opaque_root_is_returned_as_is() {
        let date = Value::date(Utc::now());
        assert!(deep_clone(&date, &[]).ptr_eq(&date));
    }

    #[test]
    fn test_clones_explicit_hidden_properties() {
        let a = hidden(&[("a", Value::from(123))], "__key", Value::from("yes"));
        let cloned = deep_clone(&a, &["__key"]);

        assert!(!cloned.ptr_eq(&a));
        assert_eq!(cloned.property("__key").unwrap().as_str(), Some("yes"));
        assert_eq!(cloned.own_keys(), vec!["a"]);
    }

    #[test]
    fn test_does_not_clone_other_hidden_properties() {
        let a = hidden(&[("a", Value::from(123))], "__foo", Value::from("yes"));
        let cloned = deep_clone(&a, &[]);
        assert!(cloned.property("__foo").is_none());
    }

    #[test]
    fn test_clones_explicit_properties_on_deep_objects() {
        let planet = hidden(&[("a", Value::from(123))], "__index", Value::from(456));
        let world = Value::object([("hello", Value::from("world")), ("planet", planet)]);
        let cloned = deep_clone(&world, &["__index"]);

        assert!(!cloned.ptr_eq(&world));
        let planet = cloned.property("planet").unwrap();
        assert_eq!(planet.property("__index").unwrap().as_f64(), Some(456.0));
    }

    #[test]
    fn test_explicit_enumerable_key_becomes_hidden() {
        let original = Value::object([("id", 1), ("a", 2)]);
        let cloned = deep_clone(&original, &["id"]);
        assert_eq!(cloned.own_keys(), vec!["a"]);
        assert_eq!(cloned.property("id").unwrap().as_f64(), Some(1.0));
    }
}
