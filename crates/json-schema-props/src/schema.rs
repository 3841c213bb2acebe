//! A minimal sub-schema node.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::extensions::{Extensions, X_ORDER};
use crate::order::{OrderExtension, OrderKey};
use crate::properties::SchemaProperties;

/// One JSON Schema node: plain keywords, optional nested `properties`, and
/// vendor extensions.
///
/// Renders keywords first (in insertion order), then `properties`, then the
/// extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub keywords: Map<String, Value>,
    pub properties: Option<SchemaProperties<Schema>>,
    pub extensions: Extensions,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema with a single `type` keyword.
    pub fn typed(type_: &str) -> Self {
        Self::new().with_keyword("type", type_)
    }

    /// Sets a keyword. `x-*` keys are stored as extensions. A raw
    /// `properties` keyword replaces any nested properties set before it.
    pub fn with_keyword(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if key.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("x-")) {
            self.extensions.add(key, value);
        } else {
            if key == "properties" {
                self.properties = None;
            }
            self.keywords.insert(key.to_string(), value);
        }
        self
    }

    pub fn with_extension(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extensions.add(key, value);
        self
    }

    /// Shorthand for an `x-order` extension.
    pub fn with_order(self, value: impl Into<Value>) -> Self {
        self.with_extension(X_ORDER, value)
    }

    /// Sets nested properties, replacing a raw `properties` keyword.
    pub fn with_properties(mut self, properties: SchemaProperties<Schema>) -> Self {
        self.keywords.shift_remove("properties");
        self.properties = Some(properties);
        self
    }
}

impl OrderExtension for Schema {
    fn order_key(&self) -> Option<OrderKey<'_>> {
        self.extensions.order_key()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Nested properties take precedence over a raw keyword of the same name.
        let shadowed = self.properties.is_some() && self.keywords.contains_key("properties");
        let len = self.keywords.len() + self.extensions.len() + usize::from(self.properties.is_some())
            - usize::from(shadowed);
        let mut map = serializer.serialize_map(Some(len))?;
        for (k, v) in &self.keywords {
            if shadowed && k == "properties" {
                continue;
            }
            map.serialize_entry(k, v)?;
        }
        if let Some(properties) = &self.properties {
            map.serialize_entry("properties", properties)?;
        }
        for (k, v) in self.extensions.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
