//! Error types for the media_library crate.

use thiserror::Error;

/// Errors that can occur when talking to the media library API.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Missing private API key")]
    MissingPrivateKey,

    #[error("Failed to read credentials file: {0}")]
    CredentialsFileError(#[from] std::io::Error),

    #[error("Failed to parse credentials JSON: {0}")]
    CredentialsParseError(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid list options: {0}")]
    InvalidOptions(String),

    #[error("Invalid crop region: {0}")]
    InvalidCoordinates(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Result type alias for MediaError.
pub type Result<T> = std::result::Result<T, MediaError>;
