//! Skein - Functional sequence toolkit
//!
//! This crate re-exports all layers of the Skein system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: skein_collection  - Stateful, chainable wrapper
//! Layer 1: skein_stdlib      - Pure sequence algorithms
//! Layer 0: skein_foundation  - Core types (Value, Record, Error, Accessor)
//! ```

pub use skein_collection as collection;
pub use skein_foundation as foundation;
pub use skein_stdlib as stdlib;

pub use skein_collection::Collection;
pub use skein_foundation::{Error, ErrorKind, Record, Result, Value};
