//! Letterbox geometry: fit an image inside a viewport without distortion and
//! center it, then map viewport coordinates back to image pixels.

use chromascope_image::{ImageError, ImageSize};

/// Where a fitted image lands inside a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Size of the source image.
    pub source: ImageSize,
    /// Size of the viewport.
    pub viewport: ImageSize,
    /// Uniform scale factor, `min(Wv / W, Hv / H)`.
    pub scale: f64,
    /// Size of the scaled image.
    pub size: ImageSize,
    /// Column of the top-left corner of the scaled image in the viewport.
    pub offset_x: usize,
    /// Row of the top-left corner of the scaled image in the viewport.
    pub offset_y: usize,
}

impl Placement {
    /// Map a viewport coordinate back to the source pixel it shows.
    ///
    /// Returns `None` on the letterbox margins and outside the viewport.
    ///
    /// # Example
    ///
    /// ```
    /// use chromascope_image::ImageSize;
    /// use chromascope_imgproc::fit::fit_to_viewport;
    ///
    /// let placement = fit_to_viewport(
    ///     ImageSize { width: 4, height: 2 },
    ///     ImageSize { width: 8, height: 8 },
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(placement.offset_y, 2);
    /// assert_eq!(placement.to_source(0.0, 0.0), None);
    /// assert_eq!(placement.to_source(7.5, 5.9), Some((3, 1)));
    /// ```
    pub fn to_source(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let rel_x = x - self.offset_x as f64;
        let rel_y = y - self.offset_y as f64;

        if rel_x < 0.0
            || rel_y < 0.0
            || rel_x >= self.size.width as f64
            || rel_y >= self.size.height as f64
        {
            return None;
        }

        // a dimension raised to one pixel covers more than `scale` allows
        let src_x = (rel_x / self.scale).floor() as usize;
        let src_y = (rel_y / self.scale).floor() as usize;

        Some((
            src_x.min(self.source.width.saturating_sub(1)),
            src_y.min(self.source.height.saturating_sub(1)),
        ))
    }
}

/// Compute the largest undistorted size of `source` that fits in `viewport`
/// and the offsets that center it.
///
/// The scaled size is `floor(W * scale) x floor(H * scale)`, raised to at
/// least one pixel per axis. Offsets are `floor((viewport - scaled) / 2)`.
///
/// # Errors
///
/// Returns [`ImageError::ZeroSizedImage`] if the source or the viewport has
/// a zero dimension.
pub fn fit_to_viewport(source: ImageSize, viewport: ImageSize) -> Result<Placement, ImageError> {
    if source.is_empty() {
        return Err(ImageError::ZeroSizedImage(source.width, source.height));
    }

    if viewport.is_empty() {
        return Err(ImageError::ZeroSizedImage(viewport.width, viewport.height));
    }

    let scale_x = viewport.width as f64 / source.width as f64;
    let scale_y = viewport.height as f64 / source.height as f64;
    let scale = scale_x.min(scale_y);

    let size = ImageSize {
        width: ((source.width as f64 * scale) as usize).clamp(1, viewport.width),
        height: ((source.height as f64 * scale) as usize).clamp(1, viewport.height),
    };

    Ok(Placement {
        source,
        viewport,
        scale,
        size,
        offset_x: (viewport.width - size.width) / 2,
        offset_y: (viewport.height - size.height) / 2,
    })
}
