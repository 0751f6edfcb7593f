use chromascope_image::Image;

/// Kernel for nearest neighbor interpolation of an 8-bit image.
///
/// The source index is `floor(dst * scale)`, clamped to the image.
pub(crate) fn nearest_neighbor_interpolation_u8<const C: usize>(
    image: &Image<u8, C>,
    u: usize,
    v: usize,
    scale_x: f32,
    scale_y: f32,
) -> [u8; C] {
    let iu = ((u as f32 * scale_x).floor() as usize).min(image.cols() - 1);
    let iv = ((v as f32 * scale_y).floor() as usize).min(image.rows() - 1);

    let base = (iv * image.cols() + iu) * C;
    let mut pixel = [0u8; C];
    pixel.copy_from_slice(&image.as_slice()[base..base + C]);

    pixel
}
