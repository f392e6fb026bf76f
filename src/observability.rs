//! Logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "MOCKGEN_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr.
///
/// Stdout stays clean; `go generate` shows stderr to the user.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
