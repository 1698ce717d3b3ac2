//! Configuration for the registration validator.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable limits of the registration rules.
///
/// The defaults reproduce the registration form exactly; error messages that
/// mention a limit render the configured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Minimum applicant age in whole years.
    #[serde(default = "default_minimum_age")]
    pub minimum_age: u32,
    /// Minimum number of characters in each part of the full name.
    #[serde(default = "default_min_name_part_len")]
    pub min_name_part_len: usize,
    /// Minimum number of space-separated parts in the full name.
    #[serde(default = "default_min_name_parts")]
    pub min_name_parts: usize,
}

const fn default_minimum_age() -> u32 {
    13
}

const fn default_min_name_part_len() -> usize {
    2
}

const fn default_min_name_parts() -> usize {
    2
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            minimum_age: default_minimum_age(),
            min_name_part_len: default_min_name_part_len(),
            min_name_parts: default_min_name_parts(),
        }
    }
}

impl ValidatorConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum age.
    #[must_use]
    pub const fn with_minimum_age(mut self, years: u32) -> Self {
        self.minimum_age = years;
        self
    }

    /// Sets the minimum length of each name part.
    #[must_use]
    pub const fn with_min_name_part_len(mut self, chars: usize) -> Self {
        self.min_name_part_len = chars;
        self
    }

    /// Sets the minimum number of name parts.
    #[must_use]
    pub const fn with_min_name_parts(mut self, parts: usize) -> Self {
        self.min_name_parts = parts;
        self
    }

    /// Parses and checks a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and checks a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded validator config");
        Ok(config)
    }

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_age == 0 {
            return Err(ConfigError::Invalid {
                key: "minimum_age",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.min_name_part_len == 0 {
            return Err(ConfigError::Invalid {
                key: "min_name_part_len",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.min_name_parts == 0 {
            return Err(ConfigError::Invalid {
                key: "min_name_parts",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
