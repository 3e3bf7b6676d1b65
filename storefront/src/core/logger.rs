//! Logging Infrastructure
//!
//! Structured logging setup on top of `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `RUST_LOG` takes precedence over the supplied default level. Safe to call
/// more than once; later calls are no-ops.
pub fn init_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
