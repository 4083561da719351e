//! Error types for org-graph-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the crate, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use org_graph_core::CoreError;
//!
//! let error = CoreError::ConfigError("vacation.hours_per_day must be greater than 0".into());
//! assert!(error.to_string().contains("hours_per_day"));
//! ```

use thiserror::Error;

/// Top-level error type for org-graph-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration could not be loaded or failed validation.
    ///
    /// # When This Occurs
    ///
    /// - A config file is missing required keys or has the wrong types
    /// - `Config::validate()` rejects a value (the message names the key)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The global tracing subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
