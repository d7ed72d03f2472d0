//! Type descriptors used in error reporting.

use std::fmt;

/// Runtime type of a [`Value`](crate::Value).
///
/// `Number` never describes a concrete value; it is what arithmetic
/// operations report as the expected type when they receive something
/// that is neither an int nor a float.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil type.
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Either numeric type.
    Number,
    /// String type.
    String,
    /// Nested sequence.
    Vec,
    /// Mapping-style element.
    Map,
    /// Attribute-style element.
    Record,
}

impl Type {
    /// Lowercase name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Vec => "vec",
            Self::Map => "map",
            Self::Record => "record",
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
