//! Stateful, chainable sequence wrapper for skein.
//!
//! [`Collection`] owns one sequence of [`Value`](skein_foundation::Value)s.
//! Mutating methods change that sequence in place and return `&mut Self`;
//! transforms build a new `Collection` and leave the receiver alone; scalar
//! methods return plain results. Every non-mutating method is a thin
//! forwarder to the matching function in [`skein_stdlib`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;

pub use collection::Collection;
