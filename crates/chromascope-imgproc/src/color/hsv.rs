use super::saturate_u8;
use crate::parallel;
use chromascope_image::{Image, ImageError};

/// Number of distinct hue codes in the 8-bit HSV encoding.
///
/// Hue is stored as degrees / 2 so that a full turn fits in a byte: codes
/// span `[0, HUE_RANGE_U8)`.
pub const HUE_RANGE_U8: u8 = 180;

/// Convert an RGB8 image to the 8-bit HSV encoding.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output HSV image.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: hue in degrees divided by 2, in the range [0, 179].
/// * S: saturation in the range [0, 255].
/// * V: value in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use chromascope_image::{Image, ImageSize};
/// use chromascope_imgproc::color::hsv_from_rgb_u8;
///
/// let rgb = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![0, 0, 255],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<u8, 3>::from_size_val(rgb.size(), 0).unwrap();
///
/// hsv_from_rgb_u8(&rgb, &mut hsv).unwrap();
/// assert_eq!(hsv.as_slice(), &[120, 255, 255]);
/// ```
pub fn hsv_from_rgb_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0] as f32;
        let g = src_pixel[1] as f32;
        let b = src_pixel[2] as f32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (g - b) / delta
        } else if max == g {
            120.0 + 60.0 * (b - r) / delta
        } else {
            240.0 + 60.0 * (r - g) / delta
        };

        let h = if h < 0.0 { h + 360.0 } else { h };

        // a hue rounding up to a full turn wraps back to red
        let mut h = (h / 2.0).round() as u8;
        if h >= HUE_RANGE_U8 {
            h -= HUE_RANGE_U8;
        }

        let s = if max == 0.0 {
            0.0
        } else {
            delta / max * 255.0
        };

        dst_pixel[0] = h;
        dst_pixel[1] = saturate_u8(s);
        dst_pixel[2] = src_pixel[0].max(src_pixel[1]).max(src_pixel[2]);
    });

    Ok(())
}

/// Convert an 8-bit HSV image back to RGB8.
///
/// The input follows the encoding produced by [`hsv_from_rgb_u8`]. Hue codes
/// at or above [`HUE_RANGE_U8`] are taken modulo a full turn.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_hsv_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let h = (src_pixel[0] % HUE_RANGE_U8) as f32 * 2.0;
        let s = src_pixel[1] as f32 / 255.0;
        let v = src_pixel[2] as f32 / 255.0;

        let c = v * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        dst_pixel[0] = saturate_u8((r + m) * 255.0);
        dst_pixel[1] = saturate_u8((g + m) * 255.0);
        dst_pixel[2] = saturate_u8((b + m) * 255.0);
    });

    Ok(())
}
