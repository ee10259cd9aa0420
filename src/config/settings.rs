//! Configuration settings and validation.

use crate::{Error, Result};

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "APIKEY_AUTH_LOG_LEVEL";

/// Environment variable enabling JSON log output.
pub const LOG_JSON_ENV: &str = "APIKEY_AUTH_LOG_JSON";

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON instead of plain text.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment.
    ///
    /// Reads [`LOG_LEVEL_ENV`] and [`LOG_JSON_ENV`], falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            log_level: lookup(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_json: lookup(LOG_JSON_ENV).map_or(defaults.log_json, |v| {
                matches!(v.to_lowercase().as_str(), "true" | "1" | "yes")
            }),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<()> {
        if !VALID_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.log_level,
                VALID_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
