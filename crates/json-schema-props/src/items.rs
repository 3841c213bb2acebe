//! Ordered `(name, schema)` sequences: tie-break sorting and JSON rendering.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::order::{compare_order_keys, OrderExtension};
use crate::sort::insertion_sort_by;

/// A property name paired with its sub-schema.
#[derive(Debug, PartialEq)]
pub struct NamedSchema<'a, S> {
    pub name: &'a str,
    pub schema: &'a S,
}

// Holds only references, so it is `Copy` for any `S`.
impl<S> Clone for NamedSchema<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NamedSchema<'_, S> {}

/// Tie-break comparison between two named schemas.
///
/// Entries carrying an `x-order` key sort before entries without one. Two keys
/// are compared by [`compare_order_keys`]; when that gives no answer, or when
/// neither entry has a key, the names decide.
pub fn compare_named<S: OrderExtension>(a: &NamedSchema<'_, S>, b: &NamedSchema<'_, S>) -> Ordering {
    match (a.schema.order_key(), b.schema.order_key()) {
        (Some(ka), Some(kb)) => compare_order_keys(&ka, &kb).unwrap_or_else(|| a.name.cmp(b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(b.name),
    }
}

/// Sequence of named schemas that renders as a JSON object in sequence order.
#[derive(Debug, PartialEq)]
pub struct NamedSchemas<'a, S>(pub Vec<NamedSchema<'a, S>>);

impl<S> Clone for NamedSchemas<'_, S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, S> NamedSchemas<'a, S> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedSchema<'a, S>> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.0.iter().map(|item| item.name).collect()
    }
}

impl<S: OrderExtension> NamedSchemas<'_, S> {
    /// Stable sort by the `x-order` tie-break policy.
    pub fn sort(&mut self) {
        insertion_sort_by(&mut self.0, |a, b| compare_named(a, b));
    }
}

impl<S: Serialize> NamedSchemas<'_, S> {
    /// Renders the sequence as a JSON object.
    ///
    /// Names go through the JSON string encoder. On the first sub-schema that
    /// fails to encode, the partial output is dropped and the failure is
    /// reported with the offending property name.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(2 + self.0.len() * 16);
        buf.push(b'{');
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                buf.push(b',');
            }
            serde_json::to_writer(&mut buf, item.name).map_err(|source| Error::Encode {
                name: item.name.to_string(),
                source,
            })?;
            buf.push(b':');
            if let Err(source) = serde_json::to_writer(&mut buf, item.schema) {
                tracing::debug!(property = item.name, error = %source, "property encoding failed");
                return Err(Error::Encode {
                    name: item.name.to_string(),
                    source,
                });
            }
        }
        buf.push(b'}');
        Ok(buf)
    }
}

impl<S: Serialize> Serialize for NamedSchemas<'_, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for item in &self.0 {
            map.serialize_entry(item.name, item.schema)?;
        }
        map.end()
    }
}

impl<'a, S> IntoIterator for NamedSchemas<'a, S> {
    type Item = NamedSchema<'a, S>;
    type IntoIter = std::vec::IntoIter<NamedSchema<'a, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
