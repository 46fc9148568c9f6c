//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max_keyword_chars must be between {min} and {max}, got {actual}")]
    InvalidKeywordLimit { min: usize, max: usize, actual: usize },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
