//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Directive applied when `RUST_LOG` does not set one.
pub const DEFAULT_DIRECTIVE: &str = "ecowork=info";

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// Calling this twice is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
