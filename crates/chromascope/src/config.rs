use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use chromascope_image::ImageSize;
use chromascope_imgproc::interpolation::InterpolationMode;

use crate::error::Error;

/// Settings of the viewer.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// ```
/// use chromascope::ViewerConfig;
///
/// let config: ViewerConfig = serde_json::from_str(r#"{"interpolation": "nearest"}"#).unwrap();
/// assert_eq!(config.default_viewport.width, 800);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Viewport used when the presentation layer reports none (a dimension ≤ 1).
    pub default_viewport: ImageSize,
    /// Resampling used to fit images into the viewport.
    pub interpolation: InterpolationMode,
    /// Canvas color around a letterboxed image.
    pub background: [u8; 3],
    /// Extension appended to save paths that have none.
    pub default_extension: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_viewport: ImageSize {
                width: 800,
                height: 600,
            },
            interpolation: InterpolationMode::Bilinear,
            background: [255, 255, 255],
            default_extension: "png".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Read a configuration from a JSON file.
    pub fn from_json_file(file_path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(file_path).map_err(Error::ConfigRead)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The viewport to draw into: `viewport` itself, or the configured
    /// default when a dimension is not realized yet.
    pub fn resolve_viewport(&self, viewport: ImageSize) -> ImageSize {
        if viewport.width <= 1 || viewport.height <= 1 {
            self.default_viewport
        } else {
            viewport
        }
    }

    /// Append the default extension to a path that has none.
    pub fn with_default_extension(&self, file_path: impl AsRef<Path>) -> PathBuf {
        let file_path = file_path.as_ref();
        match file_path.extension() {
            Some(_) => file_path.to_path_buf(),
            None => file_path.with_extension(&self.default_extension),
        }
    }
}
