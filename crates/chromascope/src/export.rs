use std::path::Path;

use serde::{Deserialize, Serialize};

use chromascope_io::{functional as F, IoError};

use crate::buffer::ColorBuffer;

/// What to write when saving a derived buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    /// The encoded channel bytes as they are. Other applications will read
    /// them as RGB and show false colors.
    Raw,
    /// The buffer converted back to RGB.
    #[default]
    Converted,
}

/// Write `buffer` to `file_path`, the format following the extension.
///
/// RGB buffers are written the same way in both modes.
pub fn save_buffer(
    buffer: &ColorBuffer,
    file_path: impl AsRef<Path>,
    mode: SaveMode,
) -> Result<(), IoError> {
    match mode {
        SaveMode::Raw => F::write_image_any_rgb8(file_path, buffer.image()),
        SaveMode::Converted => F::write_image_any_rgb8(file_path, &buffer.to_rgb()?),
    }
}
