//! Query-string serialization for [`ListFileOptions`].

use crate::error::{MediaError, Result};
use crate::models::ListFileOptions;

impl ListFileOptions {
    /// Serialize the options into query pairs for the files endpoint.
    ///
    /// Each set field appears exactly once under its wire name; unset fields
    /// are omitted entirely. Field order is fixed, so the same options always
    /// produce the same query string.
    pub fn to_query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        self.validate()?;

        let mut pairs = Vec::new();

        if let Some(path) = &self.path {
            pairs.push(("path", path.clone()));
        }
        if let Some(file_type) = self.file_type {
            pairs.push(("fileType", file_type.as_str().to_string()));
        }
        if let Some(tags) = &self.tags {
            pairs.push(("tags", tags.join(",")));
        }
        if let Some(include_folder) = self.include_folder {
            pairs.push(("includeFolder", include_folder.to_string()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(item_type) = self.item_type {
            pairs.push(("type", item_type.as_str().to_string()));
        }
        if let Some(search_query) = &self.search_query {
            pairs.push(("searchQuery", search_query.clone()));
        }

        Ok(pairs)
    }

    /// Reject options the server documents as out of range.
    ///
    /// `limit` must lie in [1, 1000]; a set but empty tag list is rejected
    /// rather than sent as an empty parameter. `skip` is unsigned, so its
    /// lower bound holds by construction.
    fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            if !(1..=1000).contains(&limit) {
                return Err(MediaError::InvalidOptions(format!(
                    "limit must be between 1 and 1000, got {}",
                    limit
                )));
            }
        }

        if let Some(tags) = &self.tags {
            if tags.is_empty() {
                return Err(MediaError::InvalidOptions(
                    "tags must contain at least one tag".to_string(),
                ));
            }
        }

        Ok(())
    }
}
