//! Sorting and keyed selection.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use skein_foundation::{Accessor, FieldAccessor, Result, Value};

/// Direction of a sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Orients an ascending comparison result in this direction.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Returns the elements sorted by [`Value::total_cmp`].
///
/// The sort is stable in both directions: equal elements keep their input
/// order.
#[must_use]
pub fn sort(seq: &[Value], order: SortOrder) -> Vec<Value> {
    let mut sorted = seq.to_vec();
    sorted.sort_by(|a, b| order.apply(a.total_cmp(b)));
    sorted
}

/// Returns the elements sorted by the value of `key`.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn sort_by(seq: &[Value], key: &str, order: SortOrder) -> Result<Vec<Value>> {
    sort_by_with(seq, key, order, &FieldAccessor)
}

/// Like [`sort_by`], reading keys through `accessor`.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn sort_by_with<A>(
    seq: &[Value],
    key: &str,
    order: SortOrder,
    accessor: &A,
) -> Result<Vec<Value>>
where
    A: Accessor + ?Sized,
{
    let mut keyed = seq
        .iter()
        .map(|item| Ok((accessor.require(item, key)?, item)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|(a, _), (b, _)| order.apply(a.total_cmp(b)));
    Ok(keyed.into_iter().map(|(_, item)| item.clone()).collect())
}

/// Keeps the elements whose `key` equals `value`.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn where_eq(seq: &[Value], key: &str, value: &Value) -> Result<Vec<Value>> {
    where_eq_with(seq, key, value, &FieldAccessor)
}

/// Like [`where_eq`], reading keys through `accessor`.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn where_eq_with<A>(seq: &[Value], key: &str, value: &Value, accessor: &A) -> Result<Vec<Value>>
where
    A: Accessor + ?Sized,
{
    select(seq, key, accessor, |found| found == value)
}

/// Keeps the elements whose `key` lies within `range`, bounds included.
///
/// Numbers are checked by value with [`Value::cmp_numeric`], so `Int(3)` lies
/// within `Float(1.0)..=Float(3.0)`. Other keys use the natural ordering, and
/// a key that does not compare with the bounds (a string against int bounds,
/// say) is never in range.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn where_in(seq: &[Value], key: &str, range: &RangeInclusive<Value>) -> Result<Vec<Value>> {
    where_in_with(seq, key, range, &FieldAccessor)
}

/// Like [`where_in`], reading keys through `accessor`.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn where_in_with<A>(
    seq: &[Value],
    key: &str,
    range: &RangeInclusive<Value>,
    accessor: &A,
) -> Result<Vec<Value>>
where
    A: Accessor + ?Sized,
{
    select(seq, key, accessor, |found| within(found, range))
}

fn within(found: &Value, range: &RangeInclusive<Value>) -> bool {
    let at_most = |a: &Value, b: &Value| {
        a.cmp_numeric(b)
            .or_else(|| a.partial_cmp(b))
            .is_some_and(Ordering::is_le)
    };
    at_most(range.start(), found) && at_most(found, range.end())
}

fn select<A, P>(seq: &[Value], key: &str, accessor: &A, mut keep: P) -> Result<Vec<Value>>
where
    A: Accessor + ?Sized,
    P: FnMut(&Value) -> bool,
{
    let mut selected = Vec::new();
    for item in seq {
        if keep(&accessor.require(item, key)?) {
            selected.push(item.clone());
        }
    }
    Ok(selected)
}
