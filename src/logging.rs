//! Development-time tracing for diagnosing store and coordinator activity.
//!
//! Diagnostics go to stderr so they never interleave with the report
//! output on stdout, and are controlled by `RUST_LOG`; they are not part
//! of the product output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; when unset, defaults to `warn`, or to
/// `matricula=debug` when `verbose` is requested.
///
/// # Example
/// ```bash
/// RUST_LOG=matricula=debug matricula enroll "Ana Pereira" 51234567 S2 C2
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "matricula=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
