//! The dynamic value model every helper in this crate operates on.
//!
//! Containers are shared through `Rc<RefCell<_>>`, so cloning a [`Value`]
//! copies a reference, never the structure (use
//! [`deep_clone`](crate::object::deep_clone) for that). Sharing also means a
//! value can contain itself; such cycles are never freed unless the caller
//! breaks them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

mod json;
mod object;

pub use object::Object;

pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
pub type ObjectRef = Rc<RefCell<Object>>;
pub type MapRef = Rc<RefCell<Vec<(Value, Value)>>>;
pub type SetRef = Rc<RefCell<Vec<Value>>>;

/// A dynamically typed value.
///
/// Scalars compare and copy by value. Every other variant is a handle to a
/// shared allocation and has reference identity, observable through
/// [`Value::ptr_eq`].
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(Rc<DateTime<Utc>>),
    Regex(Rc<Regex>),
    /// Opaque key/value container. Its contents are never inspected.
    Map(MapRef),
    /// Opaque value container. Its contents are never inspected.
    Set(SetRef),
    /// Opaque byte buffer, e.g. the contents of a file handle.
    Binary(Rc<[u8]>),
    Array(ArrayRef),
    Object(ObjectRef),
}

impl Value {
    /// Builds a new array node.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolbelt::Value;
    ///
    /// let list = Value::array([1, 2, 3]);
    /// assert_eq!(list.as_array().map(|a| a.borrow().len()), Some(3));
    /// ```
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(Rc::new(RefCell::new(
            items.into_iter().map(Into::into).collect(),
        )))
    }

    /// Builds a new object node from key/value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolbelt::Value;
    ///
    /// let obj = Value::object([("a", Value::from(1)), ("b", Value::Undefined)]);
    /// assert_eq!(toolbelt::object_keys(&obj), vec!["a", "b"]);
    /// ```
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    pub fn date(date: DateTime<Utc>) -> Self {
        Value::Date(Rc::new(date))
    }

    pub fn regex(regex: Regex) -> Self {
        Value::Regex(Rc::new(regex))
    }

    pub fn map<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Self {
        Value::Map(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    pub fn set<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Set(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Binary(Rc::from(bytes.into()))
    }

    /// Short type name, `typeof`-style for scalars and constructor-style for
    /// the rest.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "Date",
            Value::Regex(_) => "RegExp",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
            Value::Binary(_) => "Binary",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// True for every variant that lives behind a shared allocation.
    pub fn is_object_typed(&self) -> bool {
        self.addr().is_some()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Address of the shared allocation, `None` for scalars.
    pub(crate) fn addr(&self) -> Option<usize> {
        let ptr = match self {
            Value::Date(rc) => Rc::as_ptr(rc) as *const (),
            Value::Regex(rc) => Rc::as_ptr(rc) as *const (),
            Value::Map(rc) => Rc::as_ptr(rc) as *const (),
            Value::Set(rc) => Rc::as_ptr(rc) as *const (),
            Value::Binary(rc) => Rc::as_ptr(rc) as *const u8 as *const (),
            Value::Array(rc) => Rc::as_ptr(rc) as *const (),
            Value::Object(rc) => Rc::as_ptr(rc) as *const (),
            _ => return None,
        };
        Some(ptr as usize)
    }

    /// Reference identity. Always false for scalars.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self.addr(), other.addr()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// JavaScript `===`: value equality for scalars, identity for the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolbelt::Value;
    ///
    /// assert!(Value::from(8).strict_equal(&Value::from(8.0)));
    /// assert!(!Value::from(f64::NAN).strict_equal(&Value::from(f64::NAN)));
    /// assert!(!Value::array([1]).strict_equal(&Value::array([1])));
    /// ```
    pub fn strict_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => self.ptr_eq(other),
        }
    }

    /// Own property lookup: object entries (hidden ones included), array
    /// indices and byte indices of binary values. Everything else has no
    /// properties.
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(object) => object.borrow().get(key).cloned(),
            Value::Array(array) => {
                let index = parse_index(key)?;
                array.borrow().get(index).cloned()
            }
            Value::Binary(bytes) => {
                let index = parse_index(key)?;
                bytes.get(index).map(|byte| Value::Number(f64::from(*byte)))
            }
            _ => None,
        }
    }

    /// Enumerable own keys, `Object.keys`-style. Arrays and binary values
    /// report their indices.
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            Value::Object(object) => object.borrow().keys().cloned().collect(),
            Value::Array(array) => (0..array.borrow().len()).map(|i| i.to_string()).collect(),
            Value::Binary(bytes) => (0..bytes.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Parses a canonical array index (`"0"`, `"12"`, never `"01"` or `"+1"`).
pub(crate) fn parse_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

/// Formats a number the way `String(n)` does: plain decimal digits for
/// `1e-6 <= |n| < 1e21`, exponent notation (`1e+21`, `1.5e-7`) outside it.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => formatted,
        }
    } else {
        n.to_string()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(Rc::new(RefCell::new(object)))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::date(date)
    }
}

impl From<Regex> for Value {
    fn from(regex: Regex) -> Self {
        Value::regex(regex)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_debug(self, f, &mut Vec::new())
    }
}

fn write_debug(value: &Value, f: &mut fmt::Formatter<'_>, stack: &mut Vec<usize>) -> fmt::Result {
    if let Some(addr) = value.addr() {
        if stack.contains(&addr) {
            return f.write_str("[Circular]");
        }
    }

    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => f.write_str(&format_number(*n)),
        Value::String(s) => write!(f, "{s:?}"),
        Value::Date(date) => write!(f, "Date({})", date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Value::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        Value::Map(map) => write!(f, "Map({})", map.borrow().len()),
        Value::Set(set) => write!(f, "Set({})", set.borrow().len()),
        Value::Binary(bytes) => write!(f, "Binary({})", bytes.len()),
        Value::Array(array) => {
            stack.push(Rc::as_ptr(array) as *const () as usize);
            f.write_str("[")?;
            for (i, item) in array.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_debug(item, f, stack)?;
            }
            stack.pop();
            f.write_str("]")
        }
        Value::Object(object) => {
            stack.push(Rc::as_ptr(object) as *const () as usize);
            f.write_str("{")?;
            for (i, (key, item)) in object.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: ")?;
                write_debug(item, f, stack)?;
            }
            stack.pop();
            f.write_str("}")
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
