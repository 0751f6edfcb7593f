use rayon::prelude::*;

use crate::interpolation::{
    bilinear_interpolation_u8, nearest_neighbor_interpolation_u8, InterpolationMode,
};
use chromascope_image::{Image, ImageError};

/// Resize an 8-bit image to the size of `dst`.
///
/// Sample positions are aligned on pixel centers, so a uniform image stays
/// uniform and an integer upscale replicates edges instead of shifting them.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, already allocated at the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns [`ImageError::ZeroSizedImage`] if either image has no pixels.
///
/// # Example
///
/// ```
/// use chromascope_image::{Image, ImageSize};
/// use chromascope_imgproc::interpolation::InterpolationMode;
/// use chromascope_imgproc::resize::resize_native;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut image_resized = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     0,
/// )
/// .unwrap();
///
/// resize_native(&image, &mut image_resized, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::ZeroSizedImage(src.width(), src.height()));
    }

    if dst.size().is_empty() {
        return Err(ImageError::ZeroSizedImage(dst.width(), dst.height()));
    }

    if src.size() == dst.size() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let scale_x = src.width() as f32 / dst.width() as f32;
    let scale_y = src.height() as f32 / dst.height() as f32;
    let dst_cols = dst.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * dst_cols)
        .enumerate()
        .for_each(|(v, row)| {
            row.chunks_exact_mut(C).enumerate().for_each(|(u, out)| {
                let pixel = match interpolation {
                    InterpolationMode::Bilinear => {
                        bilinear_interpolation_u8(src, u, v, scale_x, scale_y)
                    }
                    InterpolationMode::Nearest => {
                        nearest_neighbor_interpolation_u8(src, u, v, scale_x, scale_y)
                    }
                };
                out.copy_from_slice(&pixel);
            });
        });

    Ok(())
}
