//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events; embedding applications call
//! [`init_tracing`] once at startup to get them printed.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// Install a global fmt subscriber configured from `config`.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
///
/// # Errors
///
/// `CoreError::LoggingInit` if the filter is invalid or a global subscriber
/// is already installed.
pub fn init_tracing(config: &LoggingConfig) -> CoreResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.level.to_ascii_lowercase()).map_err(|e| {
            CoreError::LoggingInit(format!("invalid level '{}': {}", config.level, e))
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| CoreError::LoggingInit(e.to_string()))
}
