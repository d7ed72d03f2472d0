//! Element-wise transforms and structural reshaping.

use skein_foundation::{Accessor, Error, FieldAccessor, Result, Type, Value};
use tracing::debug;

/// Applies `f` to every element, preserving order.
pub fn map<F>(seq: &[Value], f: F) -> Vec<Value>
where
    F: FnMut(&Value) -> Value,
{
    seq.iter().map(f).collect()
}

/// Keeps the elements for which `pred` holds.
pub fn filter<P>(seq: &[Value], mut pred: P) -> Vec<Value>
where
    P: FnMut(&Value) -> bool,
{
    seq.iter().filter(|item| pred(item)).cloned().collect()
}

/// Drops the elements for which `pred` holds.
pub fn reject<P>(seq: &[Value], mut pred: P) -> Vec<Value>
where
    P: FnMut(&Value) -> bool,
{
    seq.iter().filter(|item| !pred(item)).cloned().collect()
}

/// Extracts `key` from every element with the default accessor.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn only(seq: &[Value], key: &str) -> Result<Vec<Value>> {
    only_with(seq, key, &FieldAccessor)
}

/// Extracts `key` from every element with a custom accessor.
///
/// # Errors
///
/// Returns `KeyNotFound` if any element lacks `key`.
pub fn only_with<A>(seq: &[Value], key: &str, accessor: &A) -> Result<Vec<Value>>
where
    A: Accessor + ?Sized,
{
    seq.iter().map(|item| accessor.require(item, key)).collect()
}

/// Splits the sequence into consecutive chunks of at most `size` elements.
///
/// Each chunk is a [`Value::Vec`]; the last one may be shorter. A size of
/// zero is treated as one.
#[must_use]
pub fn chunk(seq: &[Value], size: usize) -> Vec<Value> {
    let size = if size == 0 {
        debug!("chunk size 0 clamped to 1");
        1
    } else {
        size
    };
    seq.chunks(size)
        .map(|part| Value::Vec(part.iter().cloned().collect()))
        .collect()
}

/// Concatenates sequences in argument order.
///
/// `first` is the accumulation target: it is taken by value, every sequence
/// in `rest` is appended to it, and it is handed back. Clone it beforehand to
/// keep the original.
#[must_use]
pub fn merge<S>(mut first: Vec<Value>, rest: &[S]) -> Vec<Value>
where
    S: AsRef<[Value]>,
{
    first.reserve(rest.iter().map(|seq| seq.as_ref().len()).sum());
    for seq in rest {
        first.extend_from_slice(seq.as_ref());
    }
    first
}

/// Flattens a sequence of sequences by one level.
///
/// An empty input yields an empty sequence.
///
/// # Errors
///
/// Returns `TypeMismatch` if an element is not a [`Value::Vec`].
pub fn collapse(seqs: &[Value]) -> Result<Vec<Value>> {
    let parts = seqs
        .iter()
        .map(|item| match item {
            Value::Vec(inner) => Ok(inner.to_vec()),
            other => Err(Error::type_mismatch(Type::Vec, other.value_type())),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(merge(Vec::new(), &parts))
}
