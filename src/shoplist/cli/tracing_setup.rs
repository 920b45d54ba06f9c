//! Logging setup for the shoplist binary.
//!
//! Usage:
//!   shoplist -v ...                    # debug logging on stderr
//!   RUST_LOG=shoplist=debug shoplist   # fine-grained log control
//!
//! Without either, only warnings are shown.

use tracing_subscriber::EnvFilter;

pub type TracingError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub fn init_tracing(verbose: bool) -> Result<(), TracingError> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init()
}
