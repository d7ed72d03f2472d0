//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Record, Error, accessors, random sources,
//! persistent collections, and JSON encoding.

mod accessors;
mod collections;
mod random;
