//! Configuration management for the org graph services.

mod sub_configs;


use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{HierarchyConfig, LoggingConfig, VacationConfig};

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output formats accepted by `logging.format`.
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
    #[serde(default)]
    pub vacation: VacationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{ORG_GRAPH_ENV}.toml (environment-specific)
    /// 3. Environment variables with ORG_GRAPH prefix, e.g.
    ///    `ORG_GRAPH__VACATION__HOURS_PER_DAY=7`
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("ORG_GRAPH_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("ORG_GRAPH").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(env = %env, "Configuration loaded");
        Ok(config)
    }

    /// Configuration with all defaults, for tests and embedding.
    pub fn default_config() -> Self {
        Self {
            hierarchy: HierarchyConfig::default(),
            vacation: VacationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Every error message names the offending key.
    pub fn validate(&self) -> CoreResult<()> {
        if self.vacation.hours_per_day == 0 {
            return Err(CoreError::ConfigError(
                "vacation.hours_per_day must be greater than 0".into(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.logging.format
            )));
        }

        if self.hierarchy.reject_unknown_superiors && !self.hierarchy.validate_input {
            tracing::warn!("reject_unknown_superiors has no effect while validate_input is false");
        }

        Ok(())
    }
}
