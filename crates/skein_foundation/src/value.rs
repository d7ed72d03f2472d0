//! The dynamically shaped element type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{SkMap, SkVec};
use crate::record::Record;
use crate::types::Type;

/// An element of a sequence.
///
/// Every variant clones in O(1): strings are reference counted and nested
/// sequences and maps are persistent structures that share on clone.
///
/// Equality is structural and strict about type, so `Int(1) != Float(1.0)`;
/// floats compare by bit pattern, which keeps `NaN == NaN` and lets values
/// serve as hash keys. Ordering comes in two flavors: the natural
/// [`PartialOrd`] (numbers across int and float, strings, sequences
/// element-wise, `None` otherwise) and [`Value::total_cmp`], which orders
/// everything. Both put an int just before a float of the same value, so
/// `Equal` always means `==`; [`Value::cmp_numeric`] compares numbers by
/// value alone.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// An immutable string.
    String(Arc<str>),
    /// A nested sequence.
    Vec(SkVec<Value>),
    /// Mapping-style element, addressed by key.
    Map(SkMap<Value, Value>),
    /// Attribute-style element, addressed by field name.
    Record(Record),
}

impl Value {
    /// Builds a [`Value::Map`] from key-value pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The runtime type of this value.
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Nil => Type::Nil,
            Self::Bool(..) => Type::Bool,
            Self::Int(..) => Type::Int,
            Self::Float(..) => Type::Float,
            Self::String(..) => Type::String,
            Self::Vec(..) => Type::Vec,
            Self::Map(..) => Type::Map,
            Self::Record(..) => Type::Record,
        }
    }

    /// The integer, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        if let Self::Int(n) = self { Some(*n) } else { None }
    }

    /// The float, if this is one. Ints are not converted.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        if let Self::Float(x) = self { Some(*x) } else { None }
    }

    /// Either numeric variant widened to `f64`.
    ///
    /// Ints beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Int(n) => Some(n as f64),
            Self::Float(x) => Some(x),
            _ => None,
        }
    }

    /// The string contents, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self { Some(s) } else { None }
    }

    /// The nested sequence, if this is one.
    #[must_use]
    pub const fn as_vec(&self) -> Option<&SkVec<Value>> {
        if let Self::Vec(items) = self { Some(items) } else { None }
    }

    /// The entries, if this is a mapping-style element.
    #[must_use]
    pub const fn as_map(&self) -> Option<&SkMap<Value, Value>> {
        if let Self::Map(entries) = self { Some(entries) } else { None }
    }

    /// The record, if this is an attribute-style element.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        if let Self::Record(record) = self { Some(record) } else { None }
    }

    /// Compares two numbers by value alone.
    ///
    /// Exact for every int, including those past 2^53 that `f64` cannot
    /// hold, so `Int(1)` and `Float(1.0)` compare `Equal`. NaN sorts above
    /// every number (below, with the sign bit set). Returns `None` unless
    /// both values are numbers.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => Some(cmp_float(*a, *b)),
            (Self::Int(a), Self::Float(b)) => Some(cmp_int_float(*a, *b)),
            (Self::Float(a), Self::Int(b)) => Some(cmp_int_float(*b, *a).reverse()),
            _ => None,
        }
    }

    /// Total ordering over all values.
    ///
    /// Agrees with the natural ordering ([`PartialOrd`]) wherever that is
    /// defined, and returns `Equal` only for equal values. Values of
    /// unrelated types order by type:
    /// nil < bool < number < string < vec < map < record.
    /// Numbers compare by [`Value::cmp_numeric`]; an int sorts before a float
    /// of the same value, and `-0.0` before `0.0`. Maps compare by their
    /// entries in key order.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Nil, Self::Nil) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                self.cmp_numbers(other)
            }
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Vec(a), Self::Vec(b)) => cmp_lexicographic(
                a.iter().zip(b.iter()).map(|(x, y)| x.total_cmp(y)),
                a.len().cmp(&b.len()),
            ),
            (Self::Map(a), Self::Map(b)) => {
                let (left, right) = (ordered_entries(a), ordered_entries(b));
                cmp_lexicographic(
                    left.iter().zip(right.iter()).map(|((ka, va), (kb, vb))| {
                        ka.total_cmp(kb).then_with(|| va.total_cmp(vb))
                    }),
                    left.len().cmp(&right.len()),
                )
            }
            (Self::Record(a), Self::Record(b)) => a.name().cmp(b.name()).then_with(|| {
                cmp_lexicographic(
                    a.fields().zip(b.fields()).map(|((na, va), (nb, vb))| {
                        na.cmp(nb).then_with(|| va.total_cmp(vb))
                    }),
                    a.len().cmp(&b.len()),
                )
            }),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    // Numeric value first, then variant, then IEEE order for signed zeros.
    fn cmp_numbers(&self, other: &Self) -> Ordering {
        let by_value = self.cmp_numeric(other).unwrap_or(Ordering::Equal);
        by_value.then_with(|| match (self, other) {
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(_), Self::Float(_)) => Ordering::Less,
            (Self::Float(_), Self::Int(_)) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }

    const fn type_rank(&self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::String(_) => 3,
            Self::Vec(_) => 4,
            Self::Map(_) => 5,
            Self::Record(_) => 6,
        }
    }

    // Strings are quoted once they appear inside a container.
    fn write_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(flag) => fmt::Display::fmt(flag, f),
            Self::Int(n) => fmt::Display::fmt(n, f),
            Self::Float(x) => fmt::Display::fmt(x, f),
            Self::String(s) => fmt::Debug::fmt(&**s, f),
            Self::Vec(items) => write_joined(f, ('[', ']'), items.iter(), |f, item| {
                item.write_nested(f)
            }),
            Self::Map(entries) => {
                write_joined(f, ('{', '}'), ordered_entries(entries).into_iter(), |f, (k, v)| {
                    k.write_nested(f)?;
                    f.write_str(": ")?;
                    v.write_nested(f)
                })
            }
            Self::Record(record) => fmt::Debug::fmt(record, f),
        }
    }
}

/// Returns the entries of a map sorted by [`Value::total_cmp`] on the key.
pub(crate) fn ordered_entries(map: &SkMap<Value, Value>) -> Vec<(&Value, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    entries
}

// Numeric order where defined, so -0.0 and 0.0 tie; NaN falls back to the
// IEEE total order.
fn cmp_float(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

// Compares without widening the int, which would round past 2^53.
#[allow(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, exact in f64. Floats at or past it lie outside i64.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= BOUND {
        return Ordering::Less;
    }
    if float < -BOUND {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    int.cmp(&(whole as i64))
        .then_with(|| 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal))
}

fn cmp_lexicographic(mut pairs: impl Iterator<Item = Ordering>, lengths: Ordering) -> Ordering {
    pairs.find(|ord| ord.is_ne()).unwrap_or(lengths)
}

fn write_joined<I, W>(
    f: &mut fmt::Formatter<'_>,
    (open, close): (char, char),
    items: I,
    mut write_item: W,
) -> fmt::Result
where
    I: Iterator,
    W: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    use fmt::Write as _;

    f.write_char(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_char(close)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value as V;

        match (self, other) {
            (V::Nil, V::Nil) => true,
            (V::Bool(x), V::Bool(y)) => x == y,
            (V::Int(x), V::Int(y)) => x == y,
            // Bitwise, so NaN equals itself and Eq holds.
            (V::Float(x), V::Float(y)) => x.to_bits() == y.to_bits(),
            (V::String(x), V::String(y)) => x == y,
            (V::Vec(x), V::Vec(y)) => x == y,
            (V::Map(x), V::Map(y)) => x == y,
            (V::Record(x), V::Record(y)) => x == y,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Value as V;

        std::mem::discriminant(self).hash(state);
        match self {
            V::Nil => {}
            V::Bool(x) => x.hash(state),
            V::Int(x) => x.hash(state),
            V::Float(x) => x.to_bits().hash(state),
            V::String(x) => x.hash(state),
            V::Vec(x) => x.hash(state),
            V::Map(x) => x.hash(state),
            V::Record(x) => x.hash(state),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value as V;

        match (self, other) {
            (V::Nil, V::Nil) => Some(Ordering::Equal),
            (V::Bool(x), V::Bool(y)) => Some(x.cmp(y)),
            (V::Int(x), V::Int(y)) => Some(x.cmp(y)),
            (V::String(x), V::String(y)) => Some(x.cmp(y)),
            (V::Vec(x), V::Vec(y)) => x.iter().partial_cmp(y.iter()),
            // Numbers order like total_cmp so that Equal still means ==.
            (V::Int(_) | V::Float(_), V::Int(_) | V::Float(_)) => Some(self.cmp_numbers(other)),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::String(s) = self {
            f.write_str(s)
        } else {
            self.write_nested(f)
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<Arc<str>> for Value {
    fn from(text: Arc<str>) -> Self {
        Self::String(text)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<SkVec<Value>> for Value {
    fn from(items: SkVec<Value>) -> Self {
        Self::Vec(items)
    }
}

impl From<SkMap<Value, Value>> for Value {
    fn from(entries: SkMap<Value, Value>) -> Self {
        Self::Map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(maybe: Option<T>) -> Self {
        maybe.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Vec(items.into_iter().map(Into::into).collect())
    }
}
