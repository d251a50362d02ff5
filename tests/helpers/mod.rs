//! Test helpers module
//!
//! Shared fixtures and instrumented data sources for the integration tests.

pub mod fixtures;
pub mod flaky_source;

pub use fixtures::*;
pub use flaky_source::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}
