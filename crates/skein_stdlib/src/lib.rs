//! Sequence algorithms for skein.
//!
//! Every function here is pure: it borrows its input sequence and returns a
//! freshly built result, leaving the input and its elements untouched. The
//! one exception is [`merge`], which takes ownership of its first argument
//! and appends into it.
//!
//! Functions are organized by category:
//! - [`transform`] - map, filter, reject, chunk, merge, collapse, only
//! - [`fold`] - reduce, sum, avg
//! - [`lookup`] - contains, search, random, first, last, get
//! - [`order`] - sort, sort_by, where_eq, where_in
//! - [`group`] - group_by
//! - [`format`] - join, to_json

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fold;
pub mod format;
pub mod group;
pub mod lookup;
pub mod order;
pub mod transform;

pub use fold::{add, avg, avg_by, reduce, sum, sum_by, try_reduce};
pub use format::{DEFAULT_SEPARATOR, join, to_json};
pub use group::{GroupBy, Grouped, group_by};
pub use lookup::{Needle, contains, first, get, last, random, sample, search};
pub use order::{
    SortOrder, sort, sort_by, sort_by_with, where_eq, where_eq_with, where_in, where_in_with,
};
pub use transform::{chunk, collapse, filter, map, merge, only, only_with, reject};
