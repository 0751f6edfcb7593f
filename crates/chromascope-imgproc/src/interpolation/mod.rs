//! Pixel interpolation methods for image resampling.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the nearest source pixel value (no interpolation)
//! - **Bilinear**: linear interpolation between the four surrounding pixels

mod bilinear;
mod nearest;

pub(crate) use bilinear::bilinear_interpolation_u8;
pub(crate) use nearest::nearest_neighbor_interpolation_u8;

/// Interpolation mode for the resize operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Map a destination coordinate to the source grid using pixel centers.
///
/// Returns the integer source index of the left/top sample and the fractional
/// weight of the right/bottom one, clamped to the valid range.
#[inline]
pub(crate) fn source_coordinate(dst: usize, scale: f32, src_len: usize) -> (usize, f32) {
    let pos = (dst as f32 + 0.5) * scale - 0.5;
    if pos <= 0.0 {
        return (0, 0.0);
    }

    let idx = pos.floor() as usize;
    if idx + 1 >= src_len {
        return (src_len - 1, 0.0);
    }

    (idx, pos - idx as f32)
}
