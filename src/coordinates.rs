//! Parsing for the `customCoordinates` crop-region descriptor.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{MediaError, Result};

/// Crop-region descriptor pattern: four comma-separated decimal fields.
static CROP_REGION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,9}),(\d{1,9}),(\d{1,9}),(\d{1,9})$")
        .expect("Invalid crop region regex")
});

/// Crop region attached to an image, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Parse a descriptor string in `x,y,width,height` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_library::coordinates::CropRegion;
    ///
    /// let region = CropRegion::parse("10,20,300,400").unwrap();
    /// assert_eq!(region.width, 300);
    /// assert_eq!(region.to_string(), "10,20,300,400");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        let captures = CROP_REGION_REGEX
            .captures(trimmed)
            .ok_or_else(|| MediaError::InvalidCoordinates(raw.to_string()))?;

        let field = |idx: usize| -> Result<u32> {
            captures
                .get(idx)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .parse::<u32>()
                .map_err(|_| MediaError::InvalidCoordinates(raw.to_string()))
        };

        let region = CropRegion {
            x: field(1)?,
            y: field(2)?,
            width: field(3)?,
            height: field(4)?,
        };

        if region.width == 0 || region.height == 0 {
            return Err(MediaError::InvalidCoordinates(raw.to_string()));
        }

        Ok(region)
    }
}

impl std::fmt::Display for CropRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}
