//! Log subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;
use crate::error::SwipeError;

/// Builds the filter: `RUST_LOG` when set, otherwise the configured directives
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, SwipeError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.filter)?),
    }
}

/// Installs the global `tracing` subscriber writing to stderr
///
/// Fails if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), SwipeError> {
    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi),
        )
        .try_init()?;
    Ok(())
}
