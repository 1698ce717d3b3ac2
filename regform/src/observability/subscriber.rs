//! Tracing subscriber setup.

use crate::errors::RegformError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// How log output is filtered and formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_directive")]
    pub default_directive: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// Include the event target (module path) in output.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_directive() -> String {
    "regform=info".to_string()
}

const fn default_with_target() -> bool {
    true
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_directive: default_directive(),
            json: false,
            with_target: default_with_target(),
        }
    }
}

impl TracingConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback filter directive.
    #[must_use]
    pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    /// Switches JSON output on or off.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter, RegformError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.default_directive)
            .map_err(|e| RegformError::Tracing(format!("invalid directive: {e}")))
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured default directive.
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> Result<(), RegformError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(config.with_target);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| RegformError::Tracing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TracingConfig::default();
        assert_eq!(config.default_directive, "regform=info");
        assert!(!config.json);
        assert!(config.with_target);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TracingConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert_eq!(config, TracingConfig::new().with_json(true));
    }

    #[test]
    fn test_second_init_fails() {
        let config = TracingConfig::new().with_default_directive("regform=debug");
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(RegformError::Tracing(_))));
    }
}
