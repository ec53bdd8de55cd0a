//! API key credentials for the media library service.
//!
//! Every request is authenticated with HTTP basic auth, using the account's
//! private API key as the username and an empty password.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MediaError, Result};

/// Environment variable holding the private API key.
pub const PRIVATE_KEY_ENV: &str = "MEDIA_LIBRARY_PRIVATE_KEY";

/// Account credentials, usually loaded from a JSON file:
///
/// ```json
/// {
///   "privateKey": "private_...",
///   "publicKey": "public_...",
///   "urlEndpoint": "https://media.example.com/demo"
/// }
/// ```
///
/// Only the private key is required for the media API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub private_key: String,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub url_endpoint: Option<String>,
}

impl Credentials {
    /// Create credentials from a private API key.
    pub fn new(private_key: impl Into<String>) -> Result<Self> {
        let private_key = private_key.into();
        if private_key.trim().is_empty() {
            return Err(MediaError::MissingPrivateKey);
        }

        Ok(Self {
            private_key,
            public_key: None,
            url_endpoint: None,
        })
    }

    /// Load credentials from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let credentials: Credentials = serde_json::from_str(&content)?;

        if credentials.private_key.trim().is_empty() {
            return Err(MediaError::MissingPrivateKey);
        }

        Ok(credentials)
    }

    /// Load the private key from the `MEDIA_LIBRARY_PRIVATE_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV)
            .map_err(|_| MediaError::MissingEnvVar(PRIVATE_KEY_ENV.to_string()))?;
        Self::new(private_key)
    }
}
