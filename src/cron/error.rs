//! Error types for cronphrase
//!
//! Compilation itself is total and never produces these. They cover the surfaces around
//! it: configuration, offsets supplied by users, and the command-line front end.

use thiserror::Error;

/// Errors raised outside the compilation pipeline
#[derive(Debug, Error)]
pub enum CronError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A UTC offset was not of the form `±HH:MM` or was out of range
    #[error("Invalid UTC offset '{0}': expected ±HH:MM")]
    InvalidOffset(String),

    /// Reading phrases or writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML rendering failure
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for cronphrase operations
pub type Result<T> = std::result::Result<T, CronError>;
