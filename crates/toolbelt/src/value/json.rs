use std::rc::Rc;

use chrono::SecondsFormat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

use super::{Object, Value};
use crate::error::ValueError;

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(arr) => Value::array(arr.iter().map(Value::from)),
            serde_json::Value::Object(obj) => {
                let object: Object = obj.iter().map(|(k, v)| (k.clone(), Value::from(v))).collect();
                Value::from(object)
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from(&value)
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.to_json()
    }
}

impl Value {
    /// Converts to a `serde_json::Value` following `JSON.stringify` rules:
    /// undefined object entries and hidden properties are dropped, undefined
    /// array items become `null`, dates become ISO-8601 strings.
    ///
    /// # Errors
    ///
    /// Fails on non-finite numbers, on `RegExp`/`Map`/`Set` values and on
    /// circular structures.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use toolbelt::Value;
    ///
    /// let value = Value::from(json!({"a": [1, 2.5, "x"]}));
    /// assert_eq!(value.to_json().unwrap(), json!({"a": [1, 2.5, "x"]}));
    /// ```
    pub fn to_json(&self) -> Result<serde_json::Value, ValueError> {
        to_json_inner(self, &mut Vec::new())
    }
}

fn number_to_json(n: f64) -> Result<serde_json::Value, ValueError> {
    if !n.is_finite() {
        return Err(ValueError::NonFiniteNumber(n));
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(serde_json::Value::Number(Number::from(n as i64)));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or(ValueError::NonFiniteNumber(n))
}

fn to_json_inner(value: &Value, stack: &mut Vec<usize>) -> Result<serde_json::Value, ValueError> {
    if let Some(addr) = value.addr() {
        if stack.contains(&addr) {
            log::debug!("circular reference found while converting to JSON");
            return Err(ValueError::Circular);
        }
    }

    match value {
        Value::Undefined | Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Date(date) => Ok(serde_json::Value::String(
            date.to_rfc3339_opts(SecondsFormat::Millis, true),
        )),
        Value::Binary(bytes) => Ok(serde_json::Value::Array(
            bytes.iter().map(|b| serde_json::Value::from(*b)).collect(),
        )),
        Value::Regex(_) | Value::Map(_) | Value::Set(_) => Err(ValueError::Unrepresentable(value.kind())),
        Value::Array(array) => {
            stack.push(Rc::as_ptr(array) as *const () as usize);
            let items = array
                .borrow()
                .iter()
                .map(|item| to_json_inner(item, stack))
                .collect::<Result<Vec<_>, _>>()?;
            stack.pop();
            Ok(serde_json::Value::Array(items))
        }
        Value::Object(object) => {
            stack.push(Rc::as_ptr(object) as *const () as usize);
            let mut map = Map::new();
            for (key, item) in object.borrow().iter() {
                if item.is_undefined() {
                    continue;
                }
                map.insert(key.clone(), to_json_inner(item, stack)?);
            }
            stack.pop();
            Ok(serde_json::Value::Object(map))
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
