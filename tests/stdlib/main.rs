//! Integration tests for Layer 1: Stdlib
//!
//! Tests the sequence algorithms end to end: worked scenarios over maps and
//! records, and algebraic properties checked with proptest.

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("skein_stdlib=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod properties;
