//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the roll protocol.

use tracing_subscriber::EnvFilter;

/// Env var checked before `RUST_LOG`.
pub const LOG_ENV: &str = "HD_LOG";

/// Install the global subscriber. `--verbose` raises the default to debug.
pub fn init(verbose: bool) {
    let default = if verbose {
        "hd_mechanics=debug,hd=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
