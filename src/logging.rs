//! Diagnostic logging to stderr.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise bumpctl logs warnings, or everything
/// down to debug when `verbose` is on. stdout is left to operation output.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "bumpctl=debug"
    } else {
        "bumpctl=warn"
    }
}
