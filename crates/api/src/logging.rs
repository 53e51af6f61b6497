//! Logging bootstrap
//!
//! Structured tracing to stdout; the filter comes from `RUST_LOG` with an
//! `info` default.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}
