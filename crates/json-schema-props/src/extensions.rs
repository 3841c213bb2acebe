//! Vendor extensions (`x-*` members) attached to a schema node.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::order::{OrderExtension, OrderKey};

/// Extension key that requests an explicit property position.
pub const X_ORDER: &str = "x-order";

/// Insertion-ordered map of vendor extensions.
///
/// Keys are case-insensitive: they are stored and looked up lowercased.
///
/// # Example
///
/// ```
/// use json_schema_props::{Extensions, OrderExtension, OrderKey};
///
/// let mut ext = Extensions::new();
/// ext.add("X-Order", 3);
/// assert_eq!(ext.order_key(), Some(OrderKey::Integer(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds or replaces an extension. Replacing keeps the original position.
    pub fn add(&mut self, key: impl AsRef<str>, value: impl Into<Value>) {
        self.0.insert(key.as_ref().to_lowercase(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&key.to_lowercase())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_lowercase())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(&key.to_lowercase())
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    /// Returns the value as a list of strings. Any non-string element makes the
    /// whole lookup fail.
    pub fn get_string_slice(&self, key: &str) -> Option<Vec<&str>> {
        self.get(key)?.as_array()?.iter().map(Value::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl OrderExtension for Extensions {
    fn order_key(&self) -> Option<OrderKey<'_>> {
        self.0.get(X_ORDER).map(OrderKey::from_value)
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Extensions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ext = Self::new();
        for (k, v) in iter {
            ext.add(k, v);
        }
        ext
    }
}

impl Serialize for Extensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
