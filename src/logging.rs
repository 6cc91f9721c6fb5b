//! Logging initialization for the hook binaries
//!
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.
//! The default filter is `off`: the hook contract reserves stdout for
//! hints and stderr for block diagnostics, so nothing may leak onto
//! either stream unless the operator opts in.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build an EnvFilter from the RUST_LOG environment variable
///
/// An unset or empty RUST_LOG disables logging entirely.
fn build_env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"))
}

/// Initialize stderr logging.
///
/// Called once at binary startup, before stdin is read.
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(fmt_layer)
        .init();
}
