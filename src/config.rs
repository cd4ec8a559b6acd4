//! Configuration management for the contact directory.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present; stdout is left untouched so the command
//! driver's output stays machine-readable.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// What `delete_contact` does when the ID is not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Fail with an invalid-argument error.
    #[default]
    Strict,
    /// Do nothing and report that nothing was deleted.
    Lenient,
}

impl FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("Must be 'strict' or 'lenient', got: {}", other)),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}

/// Configuration for the contact directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Behavior of deletes for unknown IDs (default: strict)
    pub delete_policy: DeletePolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_DELETE_POLICY`: `strict` or `lenient` (default: strict)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let delete_policy = match env::var("CONTACT_DELETE_POLICY") {
            Ok(val) => val.parse::<DeletePolicy>().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACT_DELETE_POLICY".to_string(),
                reason,
            })?,
            Err(_) => DeletePolicy::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            delete_policy,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delete_policy: DeletePolicy::Strict,
            log_level: "error".to_string(),
        }
    }
}
