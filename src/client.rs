//! HTTP client for the media library list/search API.

use reqwest::Client;

use crate::auth::Credentials;
use crate::error::{MediaError, Result};
use crate::models::{ApiErrorBody, ListFileOptions, MediaItem};

/// Base URL for the media management API.
const MEDIA_API_BASE: &str = "https://api.imagekit.io/v1";

/// Fallback page size for [`MediaLibraryClient::list_all`], matching the
/// server's default limit.
const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Client for the media library files endpoint.
pub struct MediaLibraryClient {
    base_url: String,
    credentials: Credentials,
    http: Client,
}

impl MediaLibraryClient {
    /// Create a new client against the public API endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, MEDIA_API_BASE)
    }

    /// Create a client against a different base URL, e.g. a proxy or a test
    /// server.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            http: Client::new(),
        }
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List and search files.
    ///
    /// Issues a single `GET /files` call with the given options and returns
    /// the page of matching items. The call completes exactly once, with
    /// either the decoded items or an error.
    pub async fn list_files(&self, options: &ListFileOptions) -> Result<Vec<MediaItem>> {
        let pairs = options.to_query_pairs()?;

        tracing::debug!(params = pairs.len(), "listing files");

        let response = self
            .http
            .get(format!("{}/files", self.base_url))
            .basic_auth(&self.credentials.private_key, Some(""))
            .query(&pairs)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(&error_body) {
                return Err(MediaError::ApiError {
                    status: status.as_u16(),
                    message: api_error.message,
                });
            }
            return Err(MediaError::ApiError {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let items: Vec<MediaItem> = response.json().await?;
        Ok(items)
    }

    /// Search files with a query expression, leaving every other filter unset.
    pub async fn search_files(&self, search_query: &str) -> Result<Vec<MediaItem>> {
        let options = ListFileOptions {
            search_query: Some(search_query.to_string()),
            ..Default::default()
        };
        self.list_files(&options).await
    }

    /// Fetch every matching item, following pagination.
    ///
    /// The endpoint pages with `skip`/`limit` rather than a page token, so
    /// this repeats the call advancing `skip` by the page size until a short
    /// page comes back. The caller's `skip` is the starting offset and
    /// `limit` the page size.
    pub async fn list_all(&self, options: &ListFileOptions) -> Result<Vec<MediaItem>> {
        let page_size = options.limit.unwrap_or(DEFAULT_PAGE_SIZE);

        let mut page_options = options.clone();
        page_options.limit = Some(page_size);

        let mut skip = options.skip.unwrap_or(0);
        let mut all_items = Vec::new();

        loop {
            page_options.skip = Some(skip);

            let page = self.list_files(&page_options).await?;
            let count = page.len() as u32;
            all_items.extend(page);

            if count < page_size {
                break;
            }
            skip += page_size;
        }

        Ok(all_items)
    }
}

#[cfg(test)]
mod tests {
    // Tests are in tests/client_test.rs
}
