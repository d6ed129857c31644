//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration rejected during validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid language specification
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
