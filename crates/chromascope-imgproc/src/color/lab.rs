use super::saturate_u8;
use crate::parallel;
use chromascope_image::{Image, ImageError};

// D65 reference white, normalized to Y = 1.
const XN: f32 = 0.950456;
const ZN: f32 = 1.088754;

// CIE linear segment threshold and slope.
const EPSILON: f32 = 0.008856;
const KAPPA: f32 = 903.3;

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// Convert an RGB8 image to the 8-bit CIELab encoding.
///
/// The input is treated as sRGB with a D65 white point. The output channels
/// are stored as:
///
/// * L: lightness scaled from [0, 100] to [0, 255].
/// * a: green–red axis offset by 128.
/// * b: blue–yellow axis offset by 128.
///
/// Values are rounded and saturated to `u8`.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use chromascope_image::{Image, ImageSize};
/// use chromascope_imgproc::color::lab_from_rgb_u8;
///
/// let rgb = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![255, 255, 255, 0, 0, 0],
/// )
/// .unwrap();
///
/// let mut lab = Image::<u8, 3>::from_size_val(rgb.size(), 0).unwrap();
///
/// lab_from_rgb_u8(&rgb, &mut lab).unwrap();
/// assert_eq!(lab.as_slice(), &[255, 128, 128, 0, 128, 128]);
/// ```
pub fn lab_from_rgb_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = srgb_to_linear(src_pixel[0] as f32 / 255.0);
        let g = srgb_to_linear(src_pixel[1] as f32 / 255.0);
        let b = srgb_to_linear(src_pixel[2] as f32 / 255.0);

        let x = (0.412453 * r + 0.357580 * g + 0.180423 * b) / XN;
        let y = 0.212671 * r + 0.715160 * g + 0.072169 * b;
        let z = (0.019334 * r + 0.119193 * g + 0.950227 * b) / ZN;

        let fx = lab_f(x);
        let fy = lab_f(y);
        let fz = lab_f(z);

        let l = if y > EPSILON {
            116.0 * fy - 16.0
        } else {
            KAPPA * y
        };

        dst_pixel[0] = saturate_u8(l * 255.0 / 100.0);
        dst_pixel[1] = saturate_u8(500.0 * (fx - fy) + 128.0);
        dst_pixel[2] = saturate_u8(200.0 * (fy - fz) + 128.0);
    });

    Ok(())
}

/// Convert an 8-bit CIELab image back to RGB8.
///
/// The input follows the encoding produced by [`lab_from_rgb_u8`]. Colors
/// outside the sRGB gamut are clipped per channel.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_lab_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let l = src_pixel[0] as f32 * 100.0 / 255.0;
        let a = src_pixel[1] as f32 - 128.0;
        let b = src_pixel[2] as f32 - 128.0;

        let (y, fy) = if l <= KAPPA * EPSILON {
            let y = l / KAPPA;
            (y, 7.787 * y + 16.0 / 116.0)
        } else {
            let fy = (l + 16.0) / 116.0;
            (fy * fy * fy, fy)
        };

        let x = lab_f_inv(fy + a / 500.0) * XN;
        let z = lab_f_inv(fy - b / 200.0) * ZN;

        let r = 3.240479 * x - 1.537150 * y - 0.498535 * z;
        let g = -0.969256 * x + 1.875991 * y + 0.041556 * z;
        let b = 0.055648 * x - 0.204043 * y + 1.057311 * z;

        dst_pixel[0] = saturate_u8(linear_to_srgb(r) * 255.0);
        dst_pixel[1] = saturate_u8(linear_to_srgb(g) * 255.0);
        dst_pixel[2] = saturate_u8(linear_to_srgb(b) * 255.0);
    });

    Ok(())
}
