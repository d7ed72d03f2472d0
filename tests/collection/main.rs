//! Integration tests for Layer 2: Collection
//!
//! Tests the chainable wrapper: in-place mutation, forwarding to the
//! algorithm layer, and iteration.

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("skein_collection=trace".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod mutation;
