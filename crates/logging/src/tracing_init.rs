//! `tracing` subscriber installation.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SKIP_RM_LOG";

/// Builds the event filter from [`LOG_ENV`]; unset or invalid means `off`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
}

/// Installs a global fmt subscriber that writes to standard error.
///
/// Returns `false` when a global subscriber was already set; the existing
/// one is left in place.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init()
        .is_ok()
}
