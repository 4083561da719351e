//! Sub-configuration structures.
//!
//! This module contains the individual configuration structs that make up
//! the main `Config` structure.

use serde::{Deserialize, Serialize};

/// Hierarchy closure configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HierarchyConfig {
    /// Run the forest validation pass (duplicates, cycles) before each build.
    #[serde(default = "default_validate_input")]
    pub validate_input: bool,

    /// Reject superior ids that do not name an employee in the snapshot.
    /// When false such a superior is recorded as a terminal ancestor.
    #[serde(default)]
    pub reject_unknown_superiors: bool,
}

fn default_validate_input() -> bool {
    true
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            validate_input: default_validate_input(),
            reject_unknown_superiors: false,
        }
    }
}

impl HierarchyConfig {
    /// Builder: toggle the validation pass.
    #[must_use]
    pub fn validate_input(mut self, validate: bool) -> Self {
        self.validate_input = validate;
        self
    }

    /// Builder: toggle rejection of unknown superiors.
    #[must_use]
    pub fn reject_unknown_superiors(mut self, reject: bool) -> Self {
        self.reject_unknown_superiors = reject;
        self
    }
}

/// Vacation accounting configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct VacationConfig {
    /// Working hours that make up one vacation day (default: 8)
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
}

fn default_hours_per_day() -> u32 {
    8
}

impl Default for VacationConfig {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
        }
    }
}

/// Logging configuration. Keys missing from a layer keep their defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            include_location: false,
        }
    }
}
