use rayon::prelude::*;

use chromascope_image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// Rows are distributed over the rayon pool; the call returns once every
/// pixel has been visited.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use chromascope_image::{Image, ImageError, ImageSize};

    #[test]
    fn par_iter_rows_swaps_channels() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let src = Image::<u8, 2>::new(size, vec![1, 2, 3, 4, 5, 6, 7, 8])?;
        let mut dst = Image::<u8, 2>::from_size_val(size, 0)?;

        super::par_iter_rows(&src, &mut dst, |s, d| {
            d[0] = s[1];
            d[1] = s[0];
        });

        assert_eq!(dst.as_slice(), &[2, 1, 4, 3, 6, 5, 8, 7]);

        Ok(())
    }
}
