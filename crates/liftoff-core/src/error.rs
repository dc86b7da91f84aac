//! Error types for Liftoff

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LiftoffError
pub type Result<T> = std::result::Result<T, LiftoffError>;

/// Main error type for Liftoff operations
#[derive(Debug, Error)]
pub enum LiftoffError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog loading errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Webhook delivery errors
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing or blank required input
    #[error("Input required and not supplied: {0}")]
    MissingField(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog loading errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// Changelog file exists but could not be read
    #[error("Failed to read changelog {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Webhook delivery errors
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request never got a response (DNS, connect, TLS, ...)
    #[error("Webhook request failed: {0}")]
    Request(String),

    /// The webhook answered with a non-success status
    #[error("Webhook rejected the message: {status} - {body}")]
    Rejected { status: u16, body: String },
}
