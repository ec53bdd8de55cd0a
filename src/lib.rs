//! media_library - A typed client for a cloud media library's list/search API.
//!
//! This library provides:
//! - Typed list/search options and response records for the files endpoint
//! - An async client that executes the call with API key authentication
//! - Pagination over `skip`/`limit` for fetching full result sets
//!
//! # Example
//!
//! ```no_run
//! use media_library::{Credentials, ListFileOptions, MediaLibraryClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let credentials = Credentials::from_env()?;
//!     let client = MediaLibraryClient::new(credentials);
//!
//!     let options = ListFileOptions {
//!         path: Some("/sales-banner/".to_string()),
//!         limit: Some(10),
//!         ..Default::default()
//!     };
//!
//!     for item in client.list_files(&options).await? {
//!         println!("{}", item);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod coordinates;
pub mod error;
pub mod models;
pub mod query;

// Re-exports for convenience
pub use auth::Credentials;
pub use client::MediaLibraryClient;
pub use coordinates::CropRegion;
pub use error::{MediaError, Result};
pub use models::{FileType, ItemType, ItemTypeFilter, ListFileOptions, MediaItem, SortOrder};
