//! Tracing setup for the command-line host.
//! Logs go to stderr so `--json` output on stdout stays parseable.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. `level` wins over `RUST_LOG`.
pub fn enable_logging(level: Option<&str>) -> AppResult<()> {
    let filter = match level {
        Some(l) => EnvFilter::try_new(format!("{}={l}", env!("CARGO_PKG_NAME")))
            .map_err(|e| AppError::Logging(e.to_string()))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
