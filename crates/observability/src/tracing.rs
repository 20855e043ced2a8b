//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install a JSON fmt subscriber filtered by `RUST_LOG` (or `default_filter`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps; target is noise for a single-purpose client.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
