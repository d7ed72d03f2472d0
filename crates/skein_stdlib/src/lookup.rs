//! Membership tests, searching, sampling, and positional access.

use std::collections::HashSet;
use std::fmt;

use skein_foundation::{Error, RandomSource, Result, Value, random_index};

/// What [`contains`] and [`search`] look for.
///
/// A `Value` needle matches elements equal to it; a `Predicate` needle
/// matches elements it returns true for.
pub enum Needle<'a> {
    /// Match by equality.
    Value(Value),
    /// Match by predicate.
    Predicate(Box<dyn Fn(&Value) -> bool + 'a>),
}

impl<'a> Needle<'a> {
    /// Creates a needle that matches elements satisfying `pred`.
    pub fn predicate<P>(pred: P) -> Self
    where
        P: Fn(&Value) -> bool + 'a,
    {
        Self::Predicate(Box::new(pred))
    }

    /// Returns true if `item` matches this needle.
    #[must_use]
    pub fn matches(&self, item: &Value) -> bool {
        match self {
            Self::Value(value) => item == value,
            Self::Predicate(pred) => pred(item),
        }
    }
}

impl fmt::Debug for Needle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Predicate(_) => write!(f, "Predicate(<fn>)"),
        }
    }
}

impl From<Value> for Needle<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Value> for Needle<'_> {
    fn from(value: &Value) -> Self {
        Self::Value(value.clone())
    }
}

impl From<i64> for Needle<'_> {
    fn from(n: i64) -> Self {
        Self::Value(Value::Int(n))
    }
}

impl From<i32> for Needle<'_> {
    fn from(n: i32) -> Self {
        Self::Value(Value::from(n))
    }
}

impl From<bool> for Needle<'_> {
    fn from(b: bool) -> Self {
        Self::Value(Value::Bool(b))
    }
}

impl From<&str> for Needle<'_> {
    fn from(s: &str) -> Self {
        Self::Value(Value::from(s))
    }
}

/// Returns true if any element matches `needle`.
pub fn contains<'a, N>(seq: &[Value], needle: N) -> bool
where
    N: Into<Needle<'a>>,
{
    let needle = needle.into();
    seq.iter().any(|item| needle.matches(item))
}

/// Returns the index of the first element matching `needle`.
///
/// `None` means no element matched.
pub fn search<'a, N>(seq: &[Value], needle: N) -> Option<usize>
where
    N: Into<Needle<'a>>,
{
    let needle = needle.into();
    seq.iter().position(|item| needle.matches(item))
}

/// Picks `count` distinct positions uniformly at random and returns their
/// elements in the order they were drawn.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if `count` exceeds the sequence length.
pub fn sample<R>(seq: &[Value], count: usize, source: &mut R) -> Result<Vec<Value>>
where
    R: RandomSource + ?Sized,
{
    if count > seq.len() {
        return Err(Error::index_out_of_bounds(count, seq.len()));
    }
    let mut chosen = HashSet::with_capacity(count);
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let index = random_index(source, 0, seq.len() - 1, &chosen)?;
        chosen.insert(index);
        picked.push(seq[index].clone());
    }
    Ok(picked)
}

/// Like [`sample`], but a single pick comes back as the bare element rather
/// than a one-element [`Value::Vec`].
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if `count` exceeds the sequence length.
pub fn random<R>(seq: &[Value], count: usize, source: &mut R) -> Result<Value>
where
    R: RandomSource + ?Sized,
{
    let mut picked = sample(seq, count, source)?;
    if count == 1 {
        Ok(picked.swap_remove(0))
    } else {
        Ok(Value::from(picked))
    }
}

/// Returns the first element.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if the sequence is empty.
pub fn first(seq: &[Value]) -> Result<Value> {
    get(seq, 0)
}

/// Returns the last element.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if the sequence is empty.
pub fn last(seq: &[Value]) -> Result<Value> {
    seq.last()
        .cloned()
        .ok_or_else(|| Error::index_out_of_bounds(0, 0))
}

/// Returns the element at `index`.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if `index` is past the end.
pub fn get(seq: &[Value], index: usize) -> Result<Value> {
    seq.get(index)
        .cloned()
        .ok_or_else(|| Error::index_out_of_bounds(index, seq.len()))
}
