//! End-to-end checks of the comparator, merge, extend, clone and case
//! conversion working together through the public API.

use chrono::{TimeZone, Utc};
use regex::Regex;
use serde_json::json;
use toolbelt::strings::split_by_case;
use toolbelt::{
    deep_clone, deep_equal, extend_object, is_equal, merge_deep, to_kebab_case, to_pascal_case, EqualOptions,
    ExtendOptions, Object, Value,
};

fn object(value: serde_json::Value) -> Object {
    let value = Value::from(value);
    let object = value.as_object().map(|o| o.borrow().clone()).unwrap_or_default();
    object
}

fn json(value: Value) -> serde_json::Value {
    value.to_json().unwrap()
}

#[test]
fn comparator_is_reflexive_on_plain_data() {
    let fixtures = [
        json!(null),
        json!(42),
        json!("text"),
        json!([1, [2, [3]], {"a": null}]),
        json!({"user": {"name": "Ada", "tags": ["x", "y"], "age": 36}}),
    ];
    for fixture in fixtures {
        let value = Value::from(fixture.clone());
        assert!(deep_equal(&value, &value), "{fixture}");
        assert!(deep_equal(&value, &Value::from(fixture.clone())), "{fixture}");
    }
}

#[test]
fn comparator_dates_equal_only_by_identity() {
    let instant = Utc.timestamp_millis_opt(1000).unwrap();
    let date = Value::date(instant);
    assert!(deep_equal(&date, &date.clone()));
    assert!(!deep_equal(&Value::date(instant), &Value::date(instant)));
}

#[test]
fn comparator_shallow_mode_stops_at_first_level() {
    let a = Value::from(json!({"nested": {"x": 1}}));
    let b = Value::from(json!({"nested": {"x": 1}}));
    assert!(!is_equal(&a, &b, &EqualOptions::default()));
    assert!(is_equal(&a, &b, &EqualOptions::deep()));
}

#[test]
fn merge_deep_combines_and_leaves_source_alone() {
    let source = object(json!({"a": "foo"}));
    let target = object(json!({"b": "bar"}));
    let merged = merge_deep(&source, &target);

    assert_eq!(json(Value::from(merged)), json!({"a": "foo", "b": "bar"}));
    assert_eq!(json(Value::from(source)), json!({"a": "foo"}));
}

#[test]
fn merge_deep_replaces_arrays() {
    let merged = merge_deep(&object(json!({"a": ["foo"]})), &object(json!({"a": ["bar"]})));
    assert_eq!(json(Value::from(merged)), json!({"a": ["bar"]}));
}

#[test]
fn extend_object_ignores_undefined_when_asked() {
    let original = object(json!({"a": 1, "b": "foo"}));
    let additional = Value::object([("a", Value::Undefined), ("b", Value::from("bar"))]);
    let options = ExtendOptions {
        ignore_undefined: true,
        ..Default::default()
    };

    let extended = extend_object(&original, &additional, Some(options));
    assert_eq!(json(extended), json!({"a": 1, "b": "bar"}));
}

#[test]
fn extend_object_concatenates_arrays_when_asked() {
    let original = object(json!({"a": ["first"]}));
    let additional = Value::from(json!({"a": ["second"]}));
    let options = ExtendOptions {
        extend_arrays: true,
        ..Default::default()
    };

    let extended = extend_object(&original, &additional, Some(options));
    assert_eq!(json(extended), json!({"a": ["first", "second"]}));
}

#[test]
fn extend_object_options_from_camel_case_config() {
    let options: ExtendOptions = serde_json::from_value(json!({"extendArrays": true})).unwrap();
    assert!(options.extend_arrays);
    assert!(!options.ignore_undefined);
}

#[test]
fn deep_clone_is_equal_but_not_identical() {
    let date = Value::date(Utc.timestamp_millis_opt(0).unwrap());
    let pattern = Value::regex(Regex::new("^a+$").unwrap());
    let set = Value::set([Value::from(1)]);
    let original = Value::object([
        ("list", Value::from(json!([1, {"deep": true}]))),
        ("when", date.clone()),
        ("pattern", pattern.clone()),
        ("seen", set.clone()),
    ]);

    let cloned = deep_clone(&original, &[]);
    assert!(deep_equal(&original, &cloned));
    assert!(!original.ptr_eq(&cloned));

    let original_list = original.property("list").unwrap();
    let cloned_list = cloned.property("list").unwrap();
    assert!(!original_list.ptr_eq(&cloned_list));

    assert!(cloned.property("when").unwrap().ptr_eq(&date));
    assert!(cloned.property("pattern").unwrap().ptr_eq(&pattern));
    assert!(cloned.property("seen").unwrap().ptr_eq(&set));
}

#[test]
fn deep_clone_then_merge_does_not_touch_original() {
    let original = Value::from(json!({"theme": {"primary": "blue"}}));
    let cloned = deep_clone(&original, &[]);

    let merged = merge_deep(
        &cloned.as_object().unwrap().borrow(),
        &object(json!({"theme": {"secondary": "red"}})),
    );
    assert_eq!(
        json(Value::from(merged)),
        json!({"theme": {"primary": "blue", "secondary": "red"}})
    );
    assert_eq!(json(original), json!({"theme": {"primary": "blue"}}));
}

#[test]
fn split_by_case_examples() {
    assert_eq!(split_by_case("fooBar"), vec!["foo", "Bar"]);
    assert_eq!(split_by_case("FOOBar"), vec!["FOO", "Bar"]);
    assert_eq!(split_by_case("foo--bar-Baz"), vec!["foo", "", "bar", "Baz"]);
}

#[test]
fn case_conversion_examples() {
    assert_eq!(to_pascal_case("foo_bar-baz/qux"), "FooBarBazQux");
    assert_eq!(to_kebab_case("FooBAR"), "foo-bar");
}
