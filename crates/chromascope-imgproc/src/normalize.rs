//! Min–max normalization for display.
//!
//! Color planes such as CIELab's a/b axes or the 8-bit HSV hue only cover a
//! part of the byte range. Rescaling each plane so that its smallest value
//! maps to 0 and its largest to 255 makes its structure visible.
//!
//! ```text
//! out = round((in - min) * 255 / (max - min))
//! ```
//!
//! A constant plane has no range to stretch; every output value is then
//! [`CONSTANT_PLANE_VALUE`].

use num_traits::ToPrimitive;

use chromascope_image::{Image, ImageError};

use crate::parallel;

/// Output value for every pixel of a plane whose minimum equals its maximum.
pub const CONSTANT_PLANE_VALUE: u8 = 0;

/// Find the minimum and maximum values in an image.
///
/// # Arguments
///
/// * `image` - The input image of shape (height, width, channels).
///
/// # Returns
///
/// A tuple containing the minimum and maximum values over all channels.
///
/// # Errors
///
/// If the image has no pixels, an error is returned.
///
/// # Example
///
/// ```
/// use chromascope_image::{Image, ImageSize};
/// use chromascope_imgproc::normalize::find_min_max;
///
/// let image_data = vec![0u8, 1, 0, 1, 2, 3, 0, 1, 0, 1, 2, 3];
/// let image = Image::<u8, 3>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   image_data,
/// )
/// .unwrap();
///
/// let (min, max) = find_min_max(&image).unwrap();
/// assert_eq!(min, 0);
/// assert_eq!(max, 3);
/// ```
pub fn find_min_max<T, const C: usize>(image: &Image<T, C>) -> Result<(T, T), ImageError>
where
    T: Copy + PartialOrd,
{
    let first_element = match image.as_slice().first() {
        Some(x) => *x,
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    let mut min = first_element;
    let mut max = first_element;

    for &x in image.as_slice().iter() {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((min, max))
}

/// Find the minimum and maximum of every channel independently.
///
/// # Errors
///
/// If the image has no pixels, an error is returned.
pub fn find_min_max_per_channel<T, const C: usize>(
    image: &Image<T, C>,
) -> Result<[(T, T); C], ImageError>
where
    T: Copy + PartialOrd,
{
    let mut pixels = image.as_slice().chunks_exact(C);

    let mut ranges = match pixels.next() {
        Some(first) => {
            let mut ranges = [(first[0], first[0]); C];
            for (range, &v) in ranges.iter_mut().zip(first.iter()) {
                *range = (v, v);
            }
            ranges
        }
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    for pixel in pixels {
        for (range, &v) in ranges.iter_mut().zip(pixel.iter()) {
            if v < range.0 {
                range.0 = v;
            }
            if v > range.1 {
                range.1 = v;
            }
        }
    }

    Ok(ranges)
}

/// Stretch every channel of an image to the full `u8` range.
///
/// Each channel is normalized with its own minimum and maximum, so a three
/// channel input may shift hue relative to a joint normalization.
///
/// # Arguments
///
/// * `src` - The input image of shape (height, width, C).
/// * `dst` - The output image of shape (height, width, C).
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size,
/// [`ImageError::ImageDataNotInitialized`] if the image is empty and
/// [`ImageError::CastError`] if a value cannot be represented as `f64`.
///
/// # Example
///
/// ```
/// use chromascope_image::{Image, ImageSize};
/// use chromascope_imgproc::normalize::normalize_min_max_u8;
///
/// let plane = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![10, 20, 30],
/// )
/// .unwrap();
///
/// let mut out = Image::<u8, 1>::from_size_val(plane.size(), 0).unwrap();
/// normalize_min_max_u8(&plane, &mut out).unwrap();
///
/// assert_eq!(out.as_slice(), &[0, 128, 255]);
/// ```
pub fn normalize_min_max_u8<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError>
where
    T: Copy + PartialOrd + ToPrimitive + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let ranges = find_min_max_per_channel(src)?;

    // per channel (offset, scale) so that out = (in - offset) * scale
    let mut params = [(0f64, 0f64); C];
    for (param, (min, max)) in params.iter_mut().zip(ranges.iter()) {
        let min = min.to_f64().ok_or(ImageError::CastError)?;
        let max = max.to_f64().ok_or(ImageError::CastError)?;
        let scale = if max > min { 255.0 / (max - min) } else { 0.0 };
        *param = (min, scale);
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        for ((&v, out), &(min, scale)) in src_pixel
            .iter()
            .zip(dst_pixel.iter_mut())
            .zip(params.iter())
        {
            *out = if scale == 0.0 {
                CONSTANT_PLANE_VALUE
            } else {
                let v = v.to_f64().unwrap_or(min);
                ((v - min) * scale).round().clamp(0.0, 255.0) as u8
            };
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use chromascope_image::{Image, ImageError, ImageSize};
    use rand::Rng;

    #[test]
    fn find_min_max() -> Result<(), ImageError> {
        let image_data = vec![0u8, 1, 0, 1, 2, 3, 0, 1, 0, 1, 2, 3];
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            image_data,
        )?;

        let (min, max) = super::find_min_max(&image)?;

        assert_eq!(min, 0);
        assert_eq!(max, 3);

        Ok(())
    }

    #[test]
    fn find_min_max_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;

        assert_eq!(
            super::find_min_max(&image),
            Err(ImageError::ImageDataNotInitialized)
        );

        Ok(())
    }

    #[test]
    fn find_min_max_per_channel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![5, 100, 7, 9, 50, 7],
        )?;

        let ranges = super::find_min_max_per_channel(&image)?;
        assert_eq!(ranges, [(5, 9), (50, 100), (7, 7)]);

        Ok(())
    }

    #[test]
    fn normalize_channels_independently() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![5, 100, 7, 9, 50, 7],
        )?;

        let mut out = Image::<u8, 3>::from_size_val(image.size(), 1)?;
        super::normalize_min_max_u8(&image, &mut out)?;

        assert_eq!(out.as_slice(), &[0, 255, 0, 255, 0, 0]);

        Ok(())
    }

    #[test]
    fn normalize_constant_plane() -> Result<(), ImageError> {
        let plane = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            42,
        )?;

        let mut out = Image::<u8, 1>::from_size_val(plane.size(), 7)?;
        super::normalize_min_max_u8(&plane, &mut out)?;

        assert!(out
            .as_slice()
            .iter()
            .all(|&v| v == super::CONSTANT_PLANE_VALUE));

        Ok(())
    }

    #[test]
    fn normalize_spans_full_range() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 32,
            height: 16,
        };
        let mut rng = rand::rng();
        let mut data: Vec<f32> = (0..size.area())
            .map(|_| rng.random_range(-128.0..127.0))
            .collect();
        data[0] = -100.0;
        data[1] = 90.0;
        let plane = Image::<f32, 1>::new(size, data)?;

        let mut out = Image::<u8, 1>::from_size_val(size, 0)?;
        super::normalize_min_max_u8(&plane, &mut out)?;

        let (min, max) = super::find_min_max(&out)?;
        assert_eq!(min, 0);
        assert_eq!(max, 255);

        Ok(())
    }

    #[test]
    fn normalize_size_mismatch() -> Result<(), ImageError> {
        let plane = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut out = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 2,
            },
            0,
        )?;

        assert_eq!(
            super::normalize_min_max_u8(&plane, &mut out),
            Err(ImageError::InvalidImageSize(2, 2, 1, 2))
        );

        Ok(())
    }
}
