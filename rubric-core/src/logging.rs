//! Tracing setup for binaries and tests that want a subscriber.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber filtered by `RUBRIC_LOG`
/// (default `info`). Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env("RUBRIC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
