//! Array helpers.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use serde::Deserialize;

use crate::value::Value;

/// Sort direction for [`sort_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Wraps a value in an array unless it already is one.
///
/// `Undefined` yields an empty array; `Null` is wrapped like any other
/// value.
pub fn to_array(value: Value) -> Vec<Value> {
    match value {
        Value::Undefined => Vec::new(),
        Value::Array(array) => {
            let items = array.borrow().clone();
            items
        }
        other => vec![other],
    }
}

/// Removes duplicates, keeping the first occurrence of each item.
///
/// # Examples
///
/// ```
/// use toolbelt::uniq_array;
///
/// assert_eq!(uniq_array(&[1, 2, 3, 3, 3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn uniq_array<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

pub fn sum(items: &[f64]) -> f64 {
    items.iter().sum()
}

/// Sums the numbers `f` extracts from every item.
///
/// # Examples
///
/// ```
/// use toolbelt::sum_by;
///
/// struct Person { age: u32 }
/// let people = [Person { age: 1 }, Person { age: 2 }];
/// assert_eq!(sum_by(&people, |p| f64::from(p.age)), 3.0);
/// ```
pub fn sum_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(f).sum()
}

/// Returns a copy of `items` sorted by the `key` property of each item.
///
/// Keys order by type first: missing or unsortable values, booleans,
/// numbers, `NaN`, then strings. Within a type, numbers compare numerically
/// and strings lexicographically. The sort is stable, so items with equal
/// keys keep their relative order. `Desc` reverses the whole ordering.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt::{sort_by, SortOrder, Value};
///
/// let people = [
///     Value::from(json!({"age": 2})),
///     Value::from(json!({"age": 1})),
///     Value::from(json!({"age": 3})),
/// ];
/// let sorted = sort_by(&people, "age", SortOrder::Desc);
/// let ages: Vec<_> = sorted.iter().map(|p| p.property("age").unwrap().as_f64().unwrap()).collect();
/// assert_eq!(ages, vec![3.0, 2.0, 1.0]);
/// ```
pub fn sort_by(items: &[Value], key: &str, order: SortOrder) -> Vec<Value> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_loose(&a.property(key), &b.property(key));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_loose(a: &Option<Value>, b: &Option<Value>) -> Ordering {
    rank(a).cmp(&rank(b)).then_with(|| match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        _ => Ordering::Equal,
    })
}

/// Type bucket of a sort key. NaN gets its own bucket so the numeric
/// comparison inside a bucket never sees it.
fn rank(value: &Option<Value>) -> u8 {
    match value {
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(n)) if n.is_nan() => 3,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 4,
        _ => 0,
    }
}
