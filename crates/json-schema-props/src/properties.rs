//! The `properties` container of an object schema.

use indexmap::IndexSet;
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::io::Write;

use crate::error::Result;
use crate::items::{NamedSchema, NamedSchemas};
use crate::order::OrderExtension;
use crate::schema::Schema;

/// Map from property name to sub-schema that renders in a deterministic order.
///
/// Two forms are kept side by side: an unordered lookup map and a log of
/// names in insertion order. When the log is present, rendering follows it
/// verbatim. Without a log (a container built from a bare `HashMap`) entries
/// are sorted by their `x-order` extension, then by name.
///
/// A `default()` container is uninitialized and renders as `null`; `new()`
/// gives an empty container that renders as `{}`.
///
/// # Example
///
/// ```
/// use json_schema_props::{Schema, SchemaProperties};
/// use std::collections::HashMap;
///
/// let mut unordered = HashMap::new();
/// unordered.insert("b".to_string(), Schema::new());
/// unordered.insert("a".to_string(), Schema::new().with_order(2));
/// unordered.insert("c".to_string(), Schema::new().with_order(1));
///
/// let props = SchemaProperties::from(unordered);
/// assert_eq!(props.to_ordered_items().names(), vec!["c", "a", "b"]);
/// assert_eq!(SchemaProperties::<Schema>::default().to_json_vec().unwrap(), b"null");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaProperties<S = Schema> {
    origin: Option<HashMap<String, S>>,
    sequence: Option<IndexSet<String>>,
}

impl<S> Default for SchemaProperties<S> {
    fn default() -> Self {
        Self {
            origin: None,
            sequence: None,
        }
    }
}

impl<S> SchemaProperties<S> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            origin: Some(HashMap::with_capacity(capacity)),
            sequence: Some(IndexSet::with_capacity(capacity)),
        }
    }

    /// Stores `schema` under `name`, returning the value it replaced.
    ///
    /// A new name is appended to the insertion log; an existing name keeps its
    /// position. An uninitialized container becomes an ordered one. A
    /// container built without a log stays without one.
    pub fn insert(&mut self, name: impl Into<String>, schema: S) -> Option<S> {
        let name = name.into();
        if self.origin.is_none() {
            self.sequence = Some(IndexSet::new());
        }
        let origin = self.origin.get_or_insert_with(HashMap::new);
        if let Some(sequence) = &mut self.sequence {
            sequence.insert(name.clone());
        }
        origin.insert(name, schema)
    }

    /// Removes `name`, keeping the relative order of the remaining names.
    pub fn remove(&mut self, name: &str) -> Option<S> {
        if let Some(sequence) = &mut self.sequence {
            sequence.shift_remove(name);
        }
        self.origin.as_mut()?.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&S> {
        self.origin.as_ref()?.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of entries; 0 for an uninitialized container.
    pub fn len(&self) -> usize {
        self.origin.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `false` only for a container that has never held a map (renders `null`).
    pub fn is_initialized(&self) -> bool {
        self.origin.is_some()
    }

    /// Whether an insertion log is kept.
    pub fn is_ordered(&self) -> bool {
        self.sequence.is_some()
    }
}

impl<S: OrderExtension> SchemaProperties<S> {
    /// Projects the container into its rendering order.
    ///
    /// The insertion log wins whenever it exists, even if sorting would give a
    /// different order. Otherwise entries are sorted by the tie-break policy.
    pub fn to_ordered_items(&self) -> NamedSchemas<'_, S> {
        let Some(origin) = &self.origin else {
            return NamedSchemas(Vec::new());
        };

        if let Some(sequence) = &self.sequence {
            let items = sequence
                .iter()
                .filter_map(|name| origin.get_key_value(name.as_str()))
                .map(|(name, schema)| NamedSchema {
                    name: name.as_str(),
                    schema,
                })
                .collect();
            return NamedSchemas(items);
        }

        tracing::trace!(count = origin.len(), "sorting properties by x-order");
        let mut items = NamedSchemas(
            origin
                .iter()
                .map(|(name, schema)| NamedSchema {
                    name: name.as_str(),
                    schema,
                })
                .collect(),
        );
        // Pre-order by name so that tied keys do not inherit hash order.
        items.0.sort_unstable_by(|a, b| a.name.cmp(b.name));
        items.sort();
        items
    }

    /// `(name, schema)` pairs in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> + '_ {
        self.to_ordered_items()
            .into_iter()
            .map(|item| (item.name, item.schema))
    }
}

impl<S: OrderExtension + Serialize> SchemaProperties<S> {
    /// Renders the container as JSON text: `null` when uninitialized,
    /// otherwise an object in [`to_ordered_items`](Self::to_ordered_items) order.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        if self.origin.is_none() {
            return Ok(b"null".to_vec());
        }
        self.to_ordered_items().to_json_vec()
    }

    /// Same as [`to_json_vec`](Self::to_json_vec); nothing reaches `writer`
    /// unless the whole rendering succeeds.
    pub fn to_json_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let buf = self.to_json_vec()?;
        writer.write_all(&buf)?;
        Ok(())
    }
}

impl<S: OrderExtension + Serialize> Serialize for SchemaProperties<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        if self.origin.is_none() {
            return serializer.serialize_none();
        }
        self.to_ordered_items().serialize(serializer)
    }
}

/// Builds a container without an insertion log; it renders in tie-break order.
impl<S> From<HashMap<String, S>> for SchemaProperties<S> {
    fn from(origin: HashMap<String, S>) -> Self {
        Self {
            origin: Some(origin),
            sequence: None,
        }
    }
}

impl<K: Into<String>, S> FromIterator<(K, S)> for SchemaProperties<S> {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut props = Self::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<String>, S> Extend<(K, S)> for SchemaProperties<S> {
    fn extend<I: IntoIterator<Item = (K, S)>>(&mut self, iter: I) {
        for (name, schema) in iter {
            self.insert(name, schema);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn text(props: &SchemaProperties<Value>) -> String {
        String::from_utf8(props.to_json_vec().unwrap()).unwrap()
    }

    #[test]
    fn test_uninitialized_is_null() {
        let props: SchemaProperties<Value> = SchemaProperties::default();
        assert_eq!(props.len(), 0);
        assert!(!props.is_initialized());
        assert_eq!(props.to_json_vec().unwrap(), b"null");
        assert_eq!(serde_json::to_string(&props).unwrap(), "null");
    }

    #[test]
    fn test_empty_is_object() {
        let props: SchemaProperties<Value> = SchemaProperties::new();
        assert!(props.is_initialized());
        assert!(props.is_empty());
        assert_eq!(text(&props), "{}");
        assert_eq!(serde_json::to_string(&props).unwrap(), "{}");
    }

    #[test]
    fn test_insertion_order_wins_over_x_order() {
        let mut props = SchemaProperties::new();
        props.insert("b", json!({"x-order": 3}));
        props.insert("c", json!({}));
        props.insert("a", json!({"x-order": 1}));
        assert_eq!(props.to_ordered_items().names(), vec!["b", "c", "a"]);
        assert_eq!(
            text(&props),
            r#"{"b":{"x-order":3},"c":{},"a":{"x-order":1}}"#
        );
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut props = SchemaProperties::new();
        props.insert("first", json!(1));
        props.insert("second", json!(2));
        let old = props.insert("first", json!(10));
        assert_eq!(old, Some(json!(1)));
        assert_eq!(props.len(), 2);
        assert_eq!(text(&props), r#"{"first":10,"second":2}"#);
    }

    #[test]
    fn test_insert_into_uninitialized() {
        let mut props = SchemaProperties::default();
        props.insert("z", json!(1));
        props.insert("a", json!(2));
        assert!(props.is_ordered());
        assert_eq!(text(&props), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_insert_into_unordered_stays_unordered() {
        let mut props = SchemaProperties::from(HashMap::from([("z".to_string(), json!(1))]));
        props.insert("a", json!(2));
        assert!(!props.is_ordered());
        assert_eq!(text(&props), r#"{"a":2,"z":1}"#);
    }

    #[test]
    fn test_fallback_mixed_tie_break() {
        let props = SchemaProperties::from(HashMap::from([
            ("b".to_string(), json!({})),
            ("a".to_string(), json!({"x-order": 2})),
            ("c".to_string(), json!({"x-order": 1})),
        ]));
        assert_eq!(props.to_ordered_items().names(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut props: SchemaProperties<Value> =
            [("a", json!(1)), ("b", json!(2)), ("c", json!(3))].into_iter().collect();
        assert_eq!(props.remove("b"), Some(json!(2)));
        assert_eq!(props.remove("b"), None);
        assert!(!props.contains_key("b"));
        assert_eq!(text(&props), r#"{"a":1,"c":3}"#);
    }

    #[test]
    fn test_get_and_iter() {
        let mut props = SchemaProperties::new();
        props.insert("y", json!("why"));
        props.insert("x", json!("ex"));
        assert_eq!(props.get("x"), Some(&json!("ex")));
        assert_eq!(props.get("missing"), None);
        let pairs: Vec<(&str, &Value)> = props.iter().collect();
        assert_eq!(pairs, vec![("y", &json!("why")), ("x", &json!("ex"))]);
    }

    #[test]
    fn test_empty_name_allowed() {
        let mut props = SchemaProperties::new();
        props.insert("", json!(null));
        assert_eq!(text(&props), r#"{"":null}"#);
    }

    #[test]
    fn test_writer_receives_whole_output() {
        let mut props = SchemaProperties::new();
        props.insert("k", json!(true));
        let mut out = Vec::new();
        props.to_json_writer(&mut out).unwrap();
        assert_eq!(out, br#"{"k":true}"#);
    }

    #[test]
    fn test_embedded_in_document() {
        let mut props = SchemaProperties::new();
        props.insert("zip", json!({"type": "string"}));
        props.insert("city", json!({"type": "string"}));
        let doc = json!({"type": "object", "properties": props});
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"type":"object","properties":{"zip":{"type":"string"},"city":{"type":"string"}}}"#
        );
    }
}
