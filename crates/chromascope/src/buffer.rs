use chromascope_image::{ColorSpace, Image, ImageError, ImageSize};
use chromascope_imgproc::color;

/// A three channel 8-bit pixel buffer tagged with the color space its values
/// are expressed in.
///
/// CIELab and HSV buffers use the 8-bit encodings of
/// [`chromascope_imgproc::color`]: `L*255/100, a+128, b+128` and
/// `H/2, S, V`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBuffer {
    space: ColorSpace,
    image: Image<u8, 3>,
}

impl ColorBuffer {
    /// Tag an image with the color space of its values.
    pub fn new(space: ColorSpace, image: Image<u8, 3>) -> Self {
        Self { space, image }
    }

    /// Wrap an RGB image.
    pub fn rgb(image: Image<u8, 3>) -> Self {
        Self::new(ColorSpace::Rgb, image)
    }

    /// The color space of the stored values.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The stored values.
    pub fn image(&self) -> &Image<u8, 3> {
        &self.image
    }

    /// The size of the buffer in pixels.
    pub fn size(&self) -> ImageSize {
        self.image.size()
    }

    /// Convert the stored values back to RGB.
    ///
    /// An RGB buffer is returned as a copy.
    pub fn to_rgb(&self) -> Result<Image<u8, 3>, ImageError> {
        let mut rgb = Image::<u8, 3>::from_size_val(self.size(), 0)?;

        match self.space {
            ColorSpace::Rgb => rgb.as_slice_mut().copy_from_slice(self.image.as_slice()),
            ColorSpace::Lab => color::rgb_from_lab_u8(&self.image, &mut rgb)?,
            ColorSpace::Hsv => color::rgb_from_hsv_u8(&self.image, &mut rgb)?,
        }

        Ok(rgb)
    }
}

/// Convert an RGB image into `target`.
///
/// The result always has the size of `image`. Converting to
/// [`ColorSpace::Rgb`] copies the input.
///
/// # Example
///
/// ```
/// use chromascope::buffer::convert;
/// use chromascope::image::{ColorSpace, Image, ImageSize};
///
/// let red = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![255, 0, 0]).unwrap();
/// let hsv = convert(&red, ColorSpace::Hsv).unwrap();
///
/// assert_eq!(hsv.space(), ColorSpace::Hsv);
/// assert_eq!(hsv.image().as_slice(), &[0, 255, 255]);
/// ```
pub fn convert(image: &Image<u8, 3>, target: ColorSpace) -> Result<ColorBuffer, ImageError> {
    let mut dst = Image::<u8, 3>::from_size_val(image.size(), 0)?;

    match target {
        ColorSpace::Rgb => dst.as_slice_mut().copy_from_slice(image.as_slice()),
        ColorSpace::Lab => color::lab_from_rgb_u8(image, &mut dst)?,
        ColorSpace::Hsv => color::hsv_from_rgb_u8(image, &mut dst)?,
    }

    Ok(ColorBuffer::new(target, dst))
}

#[cfg(test)]
mod tests {
    use chromascope_image::{ColorSpace, Image, ImageError, ImageSize};

    #[test]
    fn convert_keeps_size() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 5,
                height: 3,
            },
            90,
        )?;

        for space in ColorSpace::ALL {
            let buffer = super::convert(&image, space)?;
            assert_eq!(buffer.space(), space);
            assert_eq!(buffer.size(), image.size());
        }

        Ok(())
    }

    #[test]
    fn rgb_is_identity() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1, 2, 3, 4, 5, 6],
        )?;

        let buffer = super::convert(&image, ColorSpace::Rgb)?;
        assert_eq!(buffer.image(), &image);
        assert_eq!(buffer.to_rgb()?, image);

        Ok(())
    }

    #[test]
    fn to_rgb_inverts_hsv() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255],
        )?;

        let buffer = super::convert(&image, ColorSpace::Hsv)?;
        assert_eq!(buffer.to_rgb()?, image);

        Ok(())
    }
}
