use tracing_subscriber::{EnvFilter, fmt};

use crate::args::LogLevel;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr so stdout stays
/// parseable. `--log-level` wins over `RUST_LOG`, which wins over `warn`.
pub fn init(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    // A subscriber may already be installed (tests embedding the CLI)
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
