use super::source_coordinate;
use chromascope_image::Image;

/// Kernel for bilinear interpolation of an 8-bit image.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - Destination column.
/// * `v` - Destination row.
/// * `scale_x` - Source columns per destination column.
/// * `scale_y` - Source rows per destination row.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation_u8<const C: usize>(
    image: &Image<u8, C>,
    u: usize,
    v: usize,
    scale_x: f32,
    scale_y: f32,
) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let (iu0, frac_u) = source_coordinate(u, scale_x, cols);
    let (iv0, frac_v) = source_coordinate(v, scale_y, rows);

    let iu1 = (iu0 + 1).min(cols - 1);
    let iv1 = (iv0 + 1).min(rows - 1);

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let data = image.as_slice();
    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let mut pixel = [0u8; C];
    for (k, out) in pixel.iter_mut().enumerate() {
        let val = data[base00 + k] as f32 * w00
            + data[base01 + k] as f32 * w01
            + data[base10 + k] as f32 * w10
            + data[base11 + k] as f32 * w11;
        *out = val.round().clamp(0.0, 255.0) as u8;
    }

    pixel
}
