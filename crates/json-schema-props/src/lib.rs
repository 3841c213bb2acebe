//! Order-preserving JSON serialization for JSON Schema `properties` maps.
//!
//! A [`SchemaProperties`] container remembers the order in which properties
//! were inserted and renders them back in exactly that order. Containers
//! without an insertion log (for instance, built from a plain `HashMap`) fall
//! back to ordering by the `x-order` vendor extension, then by name.
//!
//! # Example
//!
//! ```
//! use json_schema_props::{Schema, SchemaProperties};
//!
//! let mut props = SchemaProperties::new();
//! props.insert("zeta", Schema::typed("string"));
//! props.insert("alpha", Schema::typed("integer"));
//!
//! let json = props.to_json_vec().unwrap();
//! assert_eq!(
//!     String::from_utf8(json).unwrap(),
//!     r#"{"zeta":{"type":"string"},"alpha":{"type":"integer"}}"#
//! );
//! ```

pub mod error;
pub mod extensions;
pub mod items;
pub mod order;
pub mod properties;
pub mod schema;
pub mod sort;

pub use error::{Error, Result};
pub use extensions::{Extensions, X_ORDER};
pub use items::{compare_named, NamedSchema, NamedSchemas};
pub use order::{compare_order_keys, OrderExtension, OrderKey};
pub use properties::SchemaProperties;
pub use schema::Schema;
pub use sort::insertion_sort_by;
