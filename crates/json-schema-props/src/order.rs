//! The `x-order` ordering key and its comparison tiers.

use serde_json::Value;
use std::cmp::Ordering;

use crate::extensions::X_ORDER;

/// Value of an `x-order` extension, classified by JSON type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderKey<'a> {
    /// A JSON number representable as `i64`.
    Integer(i64),
    String(&'a str),
    /// Anything else: booleans, floats, objects, arrays, null, out-of-range integers.
    Other(&'a Value),
}

impl<'a> OrderKey<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Other(value),
            },
            Value::String(s) => Self::String(s),
            _ => Self::Other(value),
        }
    }

    /// Textual form used by the string comparison tier.
    fn as_text(&self) -> Option<std::borrow::Cow<'a, str>> {
        match *self {
            Self::Integer(i) => Some(std::borrow::Cow::Owned(i.to_string())),
            Self::String(s) => Some(std::borrow::Cow::Borrowed(s)),
            Self::Other(_) => None,
        }
    }
}

/// Read access to a sub-schema's ordering extension.
pub trait OrderExtension {
    /// Returns the `x-order` key, or `None` when the extension is absent.
    fn order_key(&self) -> Option<OrderKey<'_>>;
}

impl<T: OrderExtension + ?Sized> OrderExtension for &T {
    fn order_key(&self) -> Option<OrderKey<'_>> {
        (**self).order_key()
    }
}

impl<T: OrderExtension + ?Sized> OrderExtension for Box<T> {
    fn order_key(&self) -> Option<OrderKey<'_>> {
        (**self).order_key()
    }
}

/// A raw JSON schema node carries its extensions as top-level members. The
/// key matches case-insensitively, like [`Extensions`](crate::Extensions).
impl OrderExtension for Value {
    fn order_key(&self) -> Option<OrderKey<'_>> {
        let object = self.as_object()?;
        object
            .get(X_ORDER)
            .or_else(|| {
                object
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(X_ORDER))
                    .map(|(_, v)| v)
            })
            .map(OrderKey::from_value)
    }
}

/// Compares two present order keys.
///
/// Integers compare numerically. Otherwise, if both keys have a textual form,
/// they compare as strings (an integer reads as its decimal text). Returns
/// `None` when either key is [`OrderKey::Other`]; the caller then falls back
/// to the property names.
pub fn compare_order_keys(a: &OrderKey<'_>, b: &OrderKey<'_>) -> Option<Ordering> {
    if let (OrderKey::Integer(x), OrderKey::Integer(y)) = (a, b) {
        return Some(x.cmp(y));
    }
    match (a.as_text(), b.as_text()) {
        (Some(x), Some(y)) => Some(x.cmp(&y)),
        _ => None,
    }
}
