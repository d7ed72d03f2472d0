//! JSON encoding of values.
//!
//! [`Value`] implements [`serde::Serialize`] with the following mapping:
//! `Nil` becomes `null`, nested sequences become arrays, maps become objects
//! with their keys in [`Value::total_cmp`] order, and records become objects
//! of their fields in declaration order. Map keys that are not strings are
//! written using their display form, so `{1: "a"}` encodes as `{"1":"a"}`.

use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::error::{Error, ErrorKind};
use crate::value::{Value, ordered_entries};
use crate::Result;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Vec(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in ordered_entries(map) {
                    out.serialize_entry(&MapKey(key), value)?;
                }
                out.end()
            }
            Self::Record(record) => {
                let mut out = serializer.serialize_map(Some(record.len()))?;
                for (name, value) in record.fields() {
                    out.serialize_entry(name, value)?;
                }
                out.end()
            }
        }
    }
}

/// Object keys must be strings.
struct MapKey<'a>(&'a Value);

impl Serialize for MapKey<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::String(s) => serializer.serialize_str(s),
            other => serializer.collect_str(other),
        }
    }
}

/// Encodes any serializable value as compact JSON.
///
/// # Errors
///
/// Returns [`ErrorKind::Serialization`] if the encoder rejects the value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Encodes any serializable value as indented JSON.
///
/// # Errors
///
/// Returns [`ErrorKind::Serialization`] if the encoder rejects the value.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}
