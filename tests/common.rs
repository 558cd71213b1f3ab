// tests/common.rs
//! Shared test logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Call once at the start of any test that wants logs; respects RUST_LOG
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent
}
