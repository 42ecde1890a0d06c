//! Configuration loading and validation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read configuration file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigurationError {
    pub fn invalid(field: &str, reason: &str) -> Self {
        Self::InvalidValue { field: field.to_string(), reason: reason.to_string() }
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

impl From<ConfigurationError> for crate::error::SeminarError {
    fn from(err: ConfigurationError) -> Self {
        crate::error::SeminarError::ConfigurationError(err.to_string())
    }
}
