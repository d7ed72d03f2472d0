//! Field extraction for keyed operations.
//!
//! Keyed operations (`only`, `sort_by`, `where_eq`, `group_by`, ...) never
//! inspect elements directly. They go through an [`Accessor`], so callers can
//! supply their own notion of "field" for element shapes the default does not
//! understand.

use crate::error::Error;
use crate::value::Value;
use crate::Result;

/// Extracts a named field from an element.
///
/// Any `Fn(&Value, &str) -> Option<Value>` closure is an accessor.
pub trait Accessor {
    /// Returns the value stored under `key`, or `None` if the element has no
    /// such field.
    fn get(&self, element: &Value, key: &str) -> Option<Value>;

    /// Returns the value stored under `key`, or `default` when absent.
    fn get_or(&self, element: &Value, key: &str, default: Value) -> Value {
        self.get(element, key).unwrap_or(default)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`](crate::ErrorKind::KeyNotFound) if the
    /// element has no such field.
    fn require(&self, element: &Value, key: &str) -> Result<Value> {
        self.get(element, key)
            .ok_or_else(|| Error::key_not_found(key))
    }
}

impl<F> Accessor for F
where
    F: Fn(&Value, &str) -> Option<Value>,
{
    fn get(&self, element: &Value, key: &str) -> Option<Value> {
        self(element, key)
    }
}

/// The default accessor.
///
/// Mapping-style elements are looked up by string key, attribute-style
/// elements ([`Record`](crate::Record)) by field name. Everything else has no
/// fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldAccessor;

impl Accessor for FieldAccessor {
    fn get(&self, element: &Value, key: &str) -> Option<Value> {
        match element {
            Value::Map(map) => map.get(&Value::from(key)).cloned(),
            Value::Record(record) => record.get(key).cloned(),
            _ => None,
        }
    }
}
