//! Request and response types for the media library list/search endpoint.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinates::CropRegion;
use crate::error::{MediaError, Result};

/// File type filter and classification.
///
/// Used both as a request filter and as the classification the service
/// reports on each item (where only `image` and `non-image` occur).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "non-image")]
    NonImage,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::All => "all",
            FileType::Image => "image",
            FileType::NonImage => "non-image",
        }
    }
}

impl FromStr for FileType {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(FileType::All),
            "image" => Ok(FileType::Image),
            "non-image" => Ok(FileType::NonImage),
            _ => Err(MediaError::InvalidOptions(format!(
                "unknown file type: {}",
                s
            ))),
        }
    }
}

/// Kind of item the service returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    File,
    Folder,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::File => "file",
            ItemType::Folder => "folder",
        }
    }
}

/// Restricts a search to files, folders, or both. The server default is `file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemTypeFilter {
    File,
    Folder,
    All,
}

impl ItemTypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemTypeFilter::File => "file",
            ItemTypeFilter::Folder => "folder",
            ItemTypeFilter::All => "all",
        }
    }
}

impl FromStr for ItemTypeFilter {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(ItemTypeFilter::File),
            "folder" => Ok(ItemTypeFilter::Folder),
            "all" => Ok(ItemTypeFilter::All),
            _ => Err(MediaError::InvalidOptions(format!(
                "unknown item type filter: {}",
                s
            ))),
        }
    }
}

/// Sort key + direction tokens accepted by the files endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    AscName,
    DescName,
    AscCreated,
    DescCreated,
    AscUpdated,
    DescUpdated,
    AscHeight,
    DescHeight,
    AscWidth,
    DescWidth,
    AscSize,
    DescSize,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::AscName => "ASC_NAME",
            SortOrder::DescName => "DESC_NAME",
            SortOrder::AscCreated => "ASC_CREATED",
            SortOrder::DescCreated => "DESC_CREATED",
            SortOrder::AscUpdated => "ASC_UPDATED",
            SortOrder::DescUpdated => "DESC_UPDATED",
            SortOrder::AscHeight => "ASC_HEIGHT",
            SortOrder::DescHeight => "DESC_HEIGHT",
            SortOrder::AscWidth => "ASC_WIDTH",
            SortOrder::DescWidth => "DESC_WIDTH",
            SortOrder::AscSize => "ASC_SIZE",
            SortOrder::DescSize => "DESC_SIZE",
        }
    }
}

impl FromStr for SortOrder {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ASC_NAME" => Ok(SortOrder::AscName),
            "DESC_NAME" => Ok(SortOrder::DescName),
            "ASC_CREATED" => Ok(SortOrder::AscCreated),
            "DESC_CREATED" => Ok(SortOrder::DescCreated),
            "ASC_UPDATED" => Ok(SortOrder::AscUpdated),
            "DESC_UPDATED" => Ok(SortOrder::DescUpdated),
            "ASC_HEIGHT" => Ok(SortOrder::AscHeight),
            "DESC_HEIGHT" => Ok(SortOrder::DescHeight),
            "ASC_WIDTH" => Ok(SortOrder::AscWidth),
            "DESC_WIDTH" => Ok(SortOrder::DescWidth),
            "ASC_SIZE" => Ok(SortOrder::AscSize),
            "DESC_SIZE" => Ok(SortOrder::DescSize),
            _ => Err(MediaError::InvalidOptions(format!(
                "unknown sort order: {}",
                s
            ))),
        }
    }
}

/// Options for the list/search files call.
///
/// Every field is optional; unset fields are omitted from the request so the
/// server applies its documented defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFileOptions {
    /// Folder path to limit the search to, e.g. `/sales-banner/`.
    pub path: Option<String>,
    /// Restrict results by file classification.
    pub file_type: Option<FileType>,
    /// Files matching any of these tags are included. Sent as a
    /// comma-separated list.
    pub tags: Option<Vec<String>>,
    /// Include folders in the results. When true the server ignores the
    /// `tags` and `file_type` filters.
    pub include_folder: Option<bool>,
    /// Exact file or folder name.
    pub name: Option<String>,
    /// Maximum number of results per request, 1 to 1000. Server default 1000.
    pub limit: Option<u32>,
    /// Number of results to skip. Server default 0.
    pub skip: Option<u32>,
    pub sort: Option<SortOrder>,
    /// Restrict results to files, folders, or both. Wire name `type`.
    pub item_type: Option<ItemTypeFilter>,
    /// Query string in the service's Lucene-like query language, passed
    /// through opaquely. When present the server ignores `tags`,
    /// `item_type`, and `name`; the client still transmits them.
    pub search_query: Option<String>,
}

/// One file or folder record from the list/search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Opaque identifier assigned by the service.
    pub file_id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub name: String,
    /// Upload timestamp, `YYYY-MM-DDTHH:mm:ss.sssZ`.
    pub created_at: String,
    pub file_path: String,
    /// Tags on the item. `None` when the service sends null or omits the
    /// field; never an empty list in that case.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub is_private_file: bool,
    /// Crop region in `x,y,width,height` form, or `None` when unset.
    #[serde(default)]
    pub custom_coordinates: Option<String>,
    /// Publicly accessible URL.
    pub url: String,
    /// Thumbnail preview URL.
    pub thumbnail: String,
    pub file_type: FileType,
}

impl MediaItem {
    /// Parse the `custom_coordinates` descriptor, if any.
    pub fn crop_region(&self) -> Result<Option<CropRegion>> {
        match self.custom_coordinates.as_deref() {
            Some(raw) => Ok(Some(CropRegion::parse(raw)?)),
            None => Ok(None),
        }
    }
}

impl std::fmt::Display for MediaItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.file_id,
            self.item_type.as_str(),
            self.created_at,
            self.file_path
        )
    }
}

/// Error envelope the service returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub help: Option<String>,
}
