//! Left folds and numeric aggregates.

use skein_foundation::{Error, Result, Type, Value};

use crate::transform::only;

/// Folds the sequence left to right.
///
/// With a `seed`, folding starts from it and covers every element. Without
/// one, the first element is the seed and the rest are folded, so a
/// single-element sequence comes back unchanged and `f` is never called.
///
/// # Errors
///
/// Returns `EmptyInput` if the sequence is empty and no seed was given.
pub fn reduce<F>(seq: &[Value], mut f: F, seed: Option<Value>) -> Result<Value>
where
    F: FnMut(Value, &Value) -> Value,
{
    try_reduce(seq, |acc, item| Ok(f(acc, item)), seed)
}

/// Like [`reduce`], with a fallible folding function.
///
/// The first error returned by `f` aborts the fold.
///
/// # Errors
///
/// Returns `EmptyInput` if the sequence is empty and no seed was given, or
/// the first error produced by `f`.
pub fn try_reduce<F>(seq: &[Value], f: F, seed: Option<Value>) -> Result<Value>
where
    F: FnMut(Value, &Value) -> Result<Value>,
{
    let (carry, rest) = match seed {
        Some(seed) => (seed, seq),
        None => {
            let (head, rest) = seq.split_first().ok_or_else(|| Error::empty_input("reduce"))?;
            (head.clone(), rest)
        }
    };
    rest.iter().try_fold(carry, f)
}

/// Adds two values.
///
/// Ints add with overflow checking, mixing an int with a float yields a
/// float, strings concatenate, and nested sequences concatenate.
///
/// # Errors
///
/// Returns `Overflow` if int addition overflows and `TypeMismatch` for any
/// other combination of types.
#[allow(clippy::cast_precision_loss)]
pub fn add(lhs: &Value, rhs: &Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a
            .checked_add(*b)
            .map(Value::Int)
            .ok_or_else(|| Error::overflow("add")),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 + b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + *b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{a}{b}"))),
        (Value::Vec(a), Value::Vec(b)) => Ok(Value::Vec(a.iter().chain(b.iter()).cloned().collect())),
        _ => {
            let culprit = if lhs.as_number().is_some() { rhs } else { lhs };
            Err(Error::type_mismatch(Type::Number, culprit.value_type()))
        }
    }
}

/// Sums the elements with [`add`].
///
/// # Errors
///
/// Returns `EmptyInput` for an empty sequence, or whatever [`add`] reports.
pub fn sum(seq: &[Value]) -> Result<Value> {
    if seq.is_empty() {
        return Err(Error::empty_input("sum"));
    }
    try_reduce(seq, |acc, item| add(&acc, item), None)
}

/// Sums the value of `key` across elements.
///
/// # Errors
///
/// Returns `KeyNotFound` if an element lacks `key`, plus everything [`sum`]
/// reports.
pub fn sum_by(seq: &[Value], key: &str) -> Result<Value> {
    sum(&only(seq, key)?)
}

/// Arithmetic mean of the elements.
///
/// # Errors
///
/// Returns `EmptyInput` for an empty sequence and `TypeMismatch` if the
/// elements do not sum to a number.
#[allow(clippy::cast_precision_loss)]
pub fn avg(seq: &[Value]) -> Result<f64> {
    if seq.is_empty() {
        return Err(Error::empty_input("avg"));
    }
    let total = sum(seq)?;
    match total.as_number() {
        Some(n) => Ok(n / seq.len() as f64),
        None => Err(Error::type_mismatch(Type::Number, total.value_type())),
    }
}

/// Arithmetic mean of the value of `key` across elements.
///
/// # Errors
///
/// Returns `KeyNotFound` if an element lacks `key`, plus everything [`avg`]
/// reports.
pub fn avg_by(seq: &[Value], key: &str) -> Result<f64> {
    avg(&only(seq, key)?)
}
