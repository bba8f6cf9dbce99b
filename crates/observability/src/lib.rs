//! Tracing/logging setup shared by binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::ObservabilityConfig;

/// Initialize process-wide tracing with the default configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::default());
}
