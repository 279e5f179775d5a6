//! Logging bootstrap.
//!
//! Installs the global tracing subscriber for the client. The filter is
//! taken from `RUST_LOG` when set, defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a subscriber has already been installed.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
