//! Tracing and logging (shared setup).

/// Initialize process-wide tracing, choosing the output format from
/// `STOCKWORTH_LOG_FORMAT` (`json` by default, `pretty` for humans).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let format = std::env::var("STOCKWORTH_LOG_FORMAT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::LogFormat;
