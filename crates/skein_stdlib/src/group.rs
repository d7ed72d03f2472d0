//! Grouping elements by a key.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use skein_foundation::{Accessor, FieldAccessor, Result, SkMap, Value};
use tracing::debug;

/// Result of [`group_by`]: transformed key to grouped value.
pub type Grouped = SkMap<Value, Value>;

type KeyTransform<'a> = Box<dyn Fn(Value) -> Value + 'a>;
type ValueTransform<'a> = Box<dyn Fn(&Value) -> Value + 'a>;
type ListTransform<'a> = Box<dyn Fn(Vec<Value>) -> Value + 'a>;

/// Options for [`group_by`].
///
/// Key and value transforms default to the identity, the list transform
/// defaults to wrapping the group as a [`Value::Vec`], and the accessor
/// defaults to [`FieldAccessor`].
///
/// ```
/// use skein_stdlib::GroupBy;
/// use skein_foundation::Value;
///
/// let options = GroupBy::new()
///     .unique(true)
///     .value_transform(|v| Value::from(v.to_string()));
/// assert!(options.is_unique());
/// ```
pub struct GroupBy<'a> {
    unique: bool,
    key_transform: Option<KeyTransform<'a>>,
    value_transform: Option<ValueTransform<'a>>,
    list_transform: Option<ListTransform<'a>>,
    accessor: Box<dyn Accessor + 'a>,
}

impl<'a> GroupBy<'a> {
    /// Creates the default options: non-unique, identity transforms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps each key to a single element instead of a list.
    #[must_use]
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Transforms each extracted key before it is used.
    #[must_use]
    pub fn key_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Value + 'a,
    {
        self.key_transform = Some(Box::new(f));
        self
    }

    /// Transforms each element before it is stored.
    #[must_use]
    pub fn value_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Value + 'a,
    {
        self.value_transform = Some(Box::new(f));
        self
    }

    /// Turns each finished group into the value stored under its key.
    /// Ignored in unique mode.
    #[must_use]
    pub fn list_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + 'a,
    {
        self.list_transform = Some(Box::new(f));
        self
    }

    /// Reads keys through `accessor`.
    #[must_use]
    pub fn accessor<A>(mut self, accessor: A) -> Self
    where
        A: Accessor + 'a,
    {
        self.accessor = Box::new(accessor);
        self
    }

    /// Returns true if unique mode is on.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.unique
    }

    fn key(&self, raw: Value) -> Value {
        match &self.key_transform {
            Some(f) => f(raw),
            None => raw,
        }
    }

    fn value(&self, item: &Value) -> Value {
        match &self.value_transform {
            Some(f) => f(item),
            None => item.clone(),
        }
    }

    fn finish(&self, group: Vec<Value>) -> Value {
        match &self.list_transform {
            Some(f) => f(group),
            None => Value::from(group),
        }
    }
}

impl Default for GroupBy<'_> {
    fn default() -> Self {
        Self {
            unique: false,
            key_transform: None,
            value_transform: None,
            list_transform: None,
            accessor: Box::new(FieldAccessor),
        }
    }
}

impl fmt::Debug for GroupBy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy")
            .field("unique", &self.unique)
            .field("key_transform", &self.key_transform.is_some())
            .field("value_transform", &self.value_transform.is_some())
            .field("list_transform", &self.list_transform.is_some())
            .finish_non_exhaustive()
    }
}

/// Groups elements by the value of `key`.
///
/// In unique mode each key maps to one transformed element; when two
/// elements share a key the later one wins. Otherwise each key maps to a
/// group of transformed elements in input order and elements lacking `key`
/// are grouped under [`Value::Nil`]. Each group is stored as a
/// [`Value::Vec`] unless a list transform turns it into something else.
///
/// # Errors
///
/// Returns `KeyNotFound` in unique mode if an element lacks `key`.
pub fn group_by(seq: &[Value], key: &str, options: GroupBy<'_>) -> Result<Grouped> {
    if options.unique {
        let mut grouped = HashMap::with_capacity(seq.len());
        for item in seq {
            let k = options.key(options.accessor.require(item, key)?);
            if grouped.insert(k.clone(), options.value(item)).is_some() {
                debug!(key = %k, "group_by unique key collision, keeping last");
            }
        }
        return Ok(grouped.into_iter().collect());
    }

    let mut buckets: HashMap<Value, Vec<Value>> = HashMap::new();
    for item in seq {
        let k = options.key(options.accessor.get_or(item, key, Value::Nil));
        match buckets.entry(k) {
            Entry::Occupied(mut bucket) => bucket.get_mut().push(options.value(item)),
            Entry::Vacant(slot) => {
                slot.insert(vec![options.value(item)]);
            }
        }
    }
    Ok(buckets
        .into_iter()
        .map(|(k, group)| (k, options.finish(group)))
        .collect())
}
