use indexmap::IndexMap;

use super::Value;

/// A string-keyed mapping with JavaScript own-property semantics.
///
/// Enumerable entries keep insertion order and are what key counts,
/// iteration, merging and serialization see. Hidden entries model
/// non-enumerable properties: they are reachable through [`Object::get`] and
/// [`Object::has_own`] but are skipped by everything that enumerates.
#[derive(Clone, Default)]
pub struct Object {
    entries: IndexMap<String, Value>,
    hidden: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of enumerable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an own property, enumerable or hidden.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).or_else(|| self.hidden.get(key))
    }

    /// Equivalent of `Object.prototype.hasOwnProperty.call(obj, key)`.
    pub fn has_own(&self, key: &str) -> bool {
        self.entries.contains_key(key) || self.hidden.contains_key(key)
    }

    /// True when `key` is an enumerable entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets an enumerable entry. A hidden property of the same name is
    /// replaced. Existing entries keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let previous_hidden = self.hidden.shift_remove(&key);
        self.entries.insert(key, value.into()).or(previous_hidden)
    }

    /// Defines a non-enumerable property, turning an enumerable entry of the
    /// same name into a hidden one.
    pub fn define_hidden(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        self.entries.shift_remove(&key);
        self.hidden.insert(key, value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries
            .shift_remove(key)
            .or_else(|| self.hidden.shift_remove(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn hidden_keys(&self) -> impl Iterator<Item = &String> {
        self.hidden.keys()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
