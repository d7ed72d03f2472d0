//! Attribute-style elements.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A named element with ordered, named fields.
///
/// Records are the attribute-style counterpart to mapping-style
/// [`Value::Map`] elements: fields are looked up by name, keep their
/// declaration order, and the record carries a type name used for display.
/// Field names are expected to be distinct; [`Record::get`] returns the
/// first match.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: Arc<str>,
    fields: Arc<[(Arc<str>, Value)]>,
}

impl Record {
    /// Creates a record from a type name and its fields.
    pub fn new<N, I, K, V>(name: N, fields: I) -> Self
    where
        N: Into<Arc<str>>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the record's type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| &**name == field)
            .map(|(_, value)| value)
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (&**name, value))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        write!(f, ")")
    }
}
