//! Persistent sequence and map types backing nested values.
//!
//! [`SkVec`] and [`SkMap`] wrap the `im` crate so that cloning a
//! [`Value`](crate::Value) that holds a nested sequence or a mapping-style
//! element shares structure instead of copying it.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Persistent vector backing [`Value::Vec`](crate::Value::Vec).
///
/// Clones share structure, so copying a nested sequence is O(1).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SkVec<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> SkVec<T> {
    /// An empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Element count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// The front element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// The back element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    /// Copies the elements out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for SkVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: Clone> FromIterator<T> for SkVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self(items.into_iter().collect())
    }
}

impl<T: Clone> From<Vec<T>> for SkVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self(im::Vector::from(items))
    }
}

impl<T: Clone> IntoIterator for SkVec<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a SkVec<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent hash map backing [`Value::Map`](crate::Value::Map).
///
/// Iteration order is unspecified; anything that renders or compares maps
/// sorts the entries first.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SkMap<K, V>(im::HashMap<K, V>)
where
    K: Clone + Eq + Hash,
    V: Clone;

impl<K: Clone + Eq + Hash, V: Clone> SkMap<K, V> {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Entry count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    /// True when `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter()
    }

    /// Iterates over values in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.values()
    }
}

impl<K, V> fmt::Debug for SkMap<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<K: Clone + Eq + Hash, V: Clone + Hash> Hash for SkMap<K, V> {
    // Equal maps can iterate in different orders: hash each entry on its own
    // and combine with a commutative sum.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self.iter().fold(0u64, |acc, (k, v)| {
            let mut entry = DefaultHasher::new();
            k.hash(&mut entry);
            v.hash(&mut entry);
            acc.wrapping_add(entry.finish())
        });
        self.len().hash(state);
        combined.hash(state);
    }
}

impl<K: Clone + Eq + Hash, V: Clone> FromIterator<(K, V)> for SkMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self(entries.into_iter().collect())
    }
}
