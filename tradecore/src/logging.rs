//! Logging setup shared by TradeBuilt binaries.
//!
//! Filter comes from `RUST_LOG`, falling back to `info`. Output goes to
//! stderr without ANSI colour so it stays readable when redirected.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber. Calling it twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("logging initialized");
    }
}
