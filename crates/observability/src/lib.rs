//! Tracing/logging setup shared by every process that hosts catalog entities.

/// Tracing configuration (filters, output format) and subscriber installation.
pub mod tracing;

pub use self::tracing::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}

/// Route tracing output through the libtest capture (for `#[test]`s).
pub fn init_for_tests() {
    tracing::init_for_tests();
}
