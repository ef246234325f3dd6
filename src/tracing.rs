//! Logging setup for the command-line tool
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - per-mode binding counts
//! - `RUST_LOG=vimremap::settings=debug` - module-level filtering
//!
//! Logs go to stderr so `--dry-run` output on stdout stays valid JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console logging
///
/// Falls back to `info` when RUST_LOG is unset or invalid.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
