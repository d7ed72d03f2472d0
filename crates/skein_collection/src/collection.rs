//! The [`Collection`] wrapper.

use std::ops::RangeInclusive;

use skein_foundation::{Error, RandomSource, Result, ThreadRandom, Value};
use skein_stdlib::{self as stdlib, GroupBy, Grouped, Needle, SortOrder};
use tracing::trace;

/// An owned sequence with chainable operations.
///
/// ```
/// use skein_collection::Collection;
/// use skein_foundation::Value;
///
/// let mut items: Collection = (1..=4).map(Value::Int).collect();
/// items.append(5).prepend(0);
///
/// let evens = items.filter(|v| v.as_int().is_some_and(|n| n % 2 == 0));
/// assert_eq!(evens.to_list(), vec![Value::Int(0), Value::Int(2), Value::Int(4)]);
/// assert_eq!(items.count(), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Collection {
    items: Vec<Value>,
}

// Generates one forwarding method per entry. The tag selects the shape:
//   wrapped           -> Self
//   wrapped_fallible  -> Result<Self>
//   raw               -> the function's return type
//   fallible          -> Result<T>
// Fallible forwarders record the method name on the error.
macro_rules! forward {
    () => {};

    (
        $(#[$meta:meta])*
        wrapped fn $name:ident $(<$($lt:lifetime,)* $($gen:ident),*>)? ($($arg:ident: $ty:ty),*)
            $(where [$($bound:tt)*])? = $func:path;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name $(<$($lt,)* $($gen),*>)? (&self, $($arg: $ty),*) -> Self
        where
            $($($bound)*)?
        {
            Self::new($func(&self.items, $($arg),*))
        }

        forward! { $($rest)* }
    };

    (
        $(#[$meta:meta])*
        wrapped_fallible fn $name:ident $(<$($lt:lifetime,)* $($gen:ident),*>)? ($($arg:ident: $ty:ty),*)
            $(where [$($bound:tt)*])? = $func:path;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $name $(<$($lt,)* $($gen),*>)? (&self, $($arg: $ty),*) -> Result<Self>
        where
            $($($bound)*)?
        {
            $func(&self.items, $($arg),*)
                .map(Self::new)
                .map_err(|e| e.in_operation(concat!("Collection::", stringify!($name))))
        }

        forward! { $($rest)* }
    };

    (
        $(#[$meta:meta])*
        raw fn $name:ident $(<$($lt:lifetime,)* $($gen:ident),*>)? ($($arg:ident: $ty:ty),*) -> $ret:ty
            $(where [$($bound:tt)*])? = $func:path;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name $(<$($lt,)* $($gen),*>)? (&self, $($arg: $ty),*) -> $ret
        where
            $($($bound)*)?
        {
            $func(&self.items, $($arg),*)
        }

        forward! { $($rest)* }
    };

    (
        $(#[$meta:meta])*
        fallible fn $name:ident $(<$($lt:lifetime,)* $($gen:ident),*>)? ($($arg:ident: $ty:ty),*) -> $ret:ty
            $(where [$($bound:tt)*])? = $func:path;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $name $(<$($lt,)* $($gen),*>)? (&self, $($arg: $ty),*) -> Result<$ret>
        where
            $($($bound)*)?
        {
            $func(&self.items, $($arg),*)
                .map_err(|e| e.in_operation(concat!("Collection::", stringify!($name))))
        }

        forward! { $($rest)* }
    };
}

impl Collection {
    /// Wraps `items`, taking ownership.
    #[must_use]
    pub const fn new(items: Vec<Value>) -> Self {
        Self { items }
    }

    /// Creates an empty collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Wraps a copy of `items`.
    #[must_use]
    pub fn from_slice(items: &[Value]) -> Self {
        Self::new(items.to_vec())
    }

    /// Same as [`Collection::new`].
    #[must_use]
    pub const fn collect(items: Vec<Value>) -> Self {
        Self::new(items)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds `value` to the end.
    pub fn append(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        trace!(len = self.items.len(), "collection append");
        self
    }

    /// Adds `value` to the front.
    pub fn prepend(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.insert(0, value.into());
        trace!(len = self.items.len(), "collection prepend");
        self
    }

    /// Removes and returns the element at `index`, or the last element when
    /// `index` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if there is no such element.
    pub fn pop(&mut self, index: Option<usize>) -> Result<Value> {
        let len = self.items.len();
        let index = match index {
            Some(index) if index < len => index,
            None if len > 0 => len - 1,
            _ => {
                return Err(Error::index_out_of_bounds(index.unwrap_or(0), len)
                    .in_operation("Collection::pop"));
            }
        };
        trace!(index, len, "collection pop");
        Ok(self.items.remove(index))
    }

    /// Appends every sequence in `others`, in order.
    pub fn extend<S>(&mut self, others: &[S]) -> &mut Self
    where
        S: AsRef<[Value]>,
    {
        self.items = stdlib::merge(std::mem::take(&mut self.items), others);
        trace!(len = self.items.len(), "collection extend");
        self
    }

    /// Removes every element.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        trace!("collection clear");
        self
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    forward! {
        /// Applies `f` to every element.
        wrapped fn map<F>(f: F) where [F: FnMut(&Value) -> Value] = stdlib::map;

        /// Keeps the elements for which `pred` holds.
        wrapped fn filter<P>(pred: P) where [P: FnMut(&Value) -> bool] = stdlib::filter;

        /// Drops the elements for which `pred` holds.
        wrapped fn reject<P>(pred: P) where [P: FnMut(&Value) -> bool] = stdlib::reject;

        /// Sorts the elements.
        wrapped fn sort(order: SortOrder) = stdlib::sort;

        /// Splits into chunks of at most `size` elements.
        wrapped fn chunk(size: usize) = stdlib::chunk;

        /// Sorts the elements by the value of `key`.
        ///
        /// # Errors
        ///
        /// Returns `KeyNotFound` if an element lacks `key`.
        wrapped_fallible fn sort_by(key: &str, order: SortOrder) = stdlib::sort_by;

        /// Keeps the elements whose `key` equals `value`.
        ///
        /// # Errors
        ///
        /// Returns `KeyNotFound` if an element lacks `key`.
        wrapped_fallible fn where_eq(key: &str, value: &Value) = stdlib::where_eq;

        /// Keeps the elements whose `key` lies within `range`.
        ///
        /// # Errors
        ///
        /// Returns `KeyNotFound` if an element lacks `key`.
        wrapped_fallible fn where_in(key: &str, range: &RangeInclusive<Value>) = stdlib::where_in;

        /// Flattens nested sequences by one level.
        ///
        /// # Errors
        ///
        /// Returns `TypeMismatch` if an element is not a sequence.
        wrapped_fallible fn collapse() = stdlib::collapse;

        /// Extracts `key` from every element.
        ///
        /// # Errors
        ///
        /// Returns `KeyNotFound` if an element lacks `key`.
        wrapped_fallible fn only(key: &str) = stdlib::only;
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    forward! {
        /// Returns true if any element matches `needle`.
        raw fn contains<'a, N>(needle: N) -> bool where [N: Into<Needle<'a>>] = stdlib::contains;

        /// Returns the index of the first element matching `needle`.
        raw fn search<'a, N>(needle: N) -> Option<usize> where [N: Into<Needle<'a>>] = stdlib::search;

        /// Joins the display form of each element with `sep`.
        raw fn join(sep: &str) -> String = stdlib::join;

        /// Folds the elements left to right.
        ///
        /// # Errors
        ///
        /// Returns `EmptyInput` if the collection is empty and no seed was given.
        fallible fn reduce<F>(f: F, seed: Option<Value>) -> Value
            where [F: FnMut(Value, &Value) -> Value] = stdlib::reduce;

        /// Folds the elements left to right with a fallible function.
        ///
        /// # Errors
        ///
        /// Returns `EmptyInput` if the collection is empty and no seed was
        /// given, or the first error produced by `f`.
        fallible fn try_reduce<F>(f: F, seed: Option<Value>) -> Value
            where [F: FnMut(Value, &Value) -> Result<Value>] = stdlib::try_reduce;

        /// Sums the elements.
        ///
        /// # Errors
        ///
        /// Returns `EmptyInput`, `Overflow` or `TypeMismatch`.
        fallible fn sum() -> Value = stdlib::sum;

        /// Sums the value of `key` across elements.
        ///
        /// # Errors
        ///
        /// Returns `KeyNotFound` plus everything [`Collection::sum`] reports.
        fallible fn sum_by(key: &str) -> Value = stdlib::sum_by;

        /// Arithmetic mean of the elements.
        ///
        /// # Errors
        ///
        /// Returns `EmptyInput` or `TypeMismatch`.
        fallible fn avg() -> f64 = stdlib::avg;

        /// Arithmetic mean of the value of `key` across elements.
        ///
        /// # Errors
        ///
        /// Returns `KeyNotFound` plus everything [`Collection::avg`] reports.
        fallible fn avg_by(key: &str) -> f64 = stdlib::avg_by;

        /// Picks `count` distinct elements using `source`.
        ///
        /// # Errors
        ///
        /// Returns `IndexOutOfBounds` if `count` exceeds the length.
        fallible fn random_with<R>(count: usize, source: &mut R) -> Value
            where [R: RandomSource + ?Sized] = stdlib::random;

        /// Returns the first element.
        ///
        /// # Errors
        ///
        /// Returns `IndexOutOfBounds` if the collection is empty.
        fallible fn first() -> Value = stdlib::first;

        /// Returns the last element.
        ///
        /// # Errors
        ///
        /// Returns `IndexOutOfBounds` if the collection is empty.
        fallible fn last() -> Value = stdlib::last;

        /// Returns the element at `index`.
        ///
        /// # Errors
        ///
        /// Returns `IndexOutOfBounds` if `index` is past the end.
        fallible fn get(index: usize) -> Value = stdlib::get;

        /// Groups the elements by the value of `key`.
        ///
        /// # Errors
        ///
        /// Returns `KeyNotFound` in unique mode if an element lacks `key`.
        fallible fn group_by(key: &str, options: GroupBy<'_>) -> Grouped = stdlib::group_by;

        /// Encodes the elements as a JSON array.
        ///
        /// # Errors
        ///
        /// Returns `Serialization` if the encoder fails.
        fallible fn to_json() -> String = stdlib::to_json;
    }

    /// Picks `count` distinct elements at random.
    ///
    /// A single pick is returned bare, several come back as a
    /// [`Value::Vec`].
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `count` exceeds the length.
    pub fn random(&self, count: usize) -> Result<Value> {
        self.random_with(count, &mut ThreadRandom)
    }

    /// Number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy of the elements.
    #[must_use]
    pub fn to_list(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Unwraps the owned elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// Borrows the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl AsRef<[Value]> for Collection {
    fn as_ref(&self) -> &[Value] {
        &self.items
    }
}

impl From<Vec<Value>> for Collection {
    fn from(items: Vec<Value>) -> Self {
        Self::new(items)
    }
}

impl From<&[Value]> for Collection {
    fn from(items: &[Value]) -> Self {
        Self::from_slice(items)
    }
}

impl From<Collection> for Vec<Value> {
    fn from(collection: Collection) -> Self {
        collection.items
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
