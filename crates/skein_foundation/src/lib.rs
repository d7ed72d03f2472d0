//! Core types for skein.
//!
//! This crate provides:
//! - [`Value`] - The dynamically shaped element type stored in sequences
//! - [`Record`] - Attribute-style elements (named, ordered fields)
//! - [`Accessor`] - Pluggable field extraction for keyed operations
//! - [`RandomSource`] - Uniform random index generation
//! - [`Error`] - Error kinds shared by every layer
//! - Persistent collections ([`SkVec`], [`SkMap`])
//! - JSON encoding ([`json`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessor;
pub mod collections;
pub mod error;
pub mod json;
pub mod random;
pub mod record;
pub mod types;
pub mod value;

pub use accessor::{Accessor, FieldAccessor};
pub use collections::{SkMap, SkVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use random::{MAX_RANDOM_ATTEMPTS, RandomSource, SeededRandom, ThreadRandom, random_index};
pub use record::Record;
pub use types::Type;
pub use value::Value;

/// Result type used throughout skein.
pub type Result<T> = std::result::Result<T, Error>;
