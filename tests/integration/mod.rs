// tests/integration/mod.rs

mod properties;
mod random_streams;
mod rotation;

use tracing_subscriber::EnvFilter;

/// Routes library logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
