//! Diagnostic tracing for the `primer` binary.
//!
//! Tracing output goes to stderr and is controlled by `RUST_LOG`. Demo output
//! (text lines or JSON reports) goes to stdout and never depends on it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset or invalid.
///
/// # Example
/// ```bash
/// RUST_LOG=primer_harness=debug,primer_search=trace primer run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
