//! Logging setup for the command line.
//!
//! Installs a global tracing subscriber writing to stderr, so stdout stays
//! reserved for the report (and for JSON output in particular).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter for a `-v` count. `RUST_LOG` takes precedence when set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing. Failures are returned so callers can carry on without
/// logs instead of aborting.
pub fn init(verbosity: u8, use_color: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
}
