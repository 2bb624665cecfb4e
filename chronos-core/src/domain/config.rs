//! Job configuration
//!
//! The JSON document a job is launched with. It is read once at startup and
//! passed by reference into every client operation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::credentials::Credentials;

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for one job instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Base URL of the auth service (e.g., "https://auth.example.com")
    #[serde(rename = "authManagerURL")]
    pub auth_manager_url: String,

    /// Base URL of the Chronos status service
    #[serde(rename = "chronosURL")]
    pub chronos_url: String,

    /// The job run this process represents
    #[serde(rename = "instanceID")]
    pub instance_id: String,

    /// Free-form status carried alongside the job definition
    #[serde(default)]
    pub status: String,
}

impl Config {
    pub fn new(
        credentials: Credentials,
        auth_manager_url: impl Into<String>,
        chronos_url: impl Into<String>,
        instance_id: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            auth_manager_url: auth_manager_url.into(),
            chronos_url: chronos_url.into(),
            instance_id: instance_id.into(),
            status: String::new(),
        }
    }

    /// Parses and validates a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.appkey.is_empty() {
            return Err(ConfigError::Invalid("appkey cannot be empty".into()));
        }

        if self.credentials.appsecret.is_empty() {
            return Err(ConfigError::Invalid("appsecret cannot be empty".into()));
        }

        if self.instance_id.is_empty() {
            return Err(ConfigError::Invalid("instanceID cannot be empty".into()));
        }

        for (name, url) in [
            ("authManagerURL", &self.auth_manager_url),
            ("chronosURL", &self.chronos_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        Ok(())
    }
}
