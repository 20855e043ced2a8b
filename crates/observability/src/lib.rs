//! Tracing/logging setup shared by every stockroom entry point.

/// Initialize process-wide tracing with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Like [`init`], with a caller-chosen filter used when `RUST_LOG` is unset.
pub fn init_with_default_filter(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
