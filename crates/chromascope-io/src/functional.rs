use std::path::Path;

use chromascope_image::{Image, ImageSize};

use crate::error::IoError;

/// File extensions accepted for reading and writing, lowercase.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff", "webp"];

/// Whether the path ends in one of [`SUPPORTED_EXTENSIONS`], ignoring case.
pub fn has_supported_extension(file_path: impl AsRef<Path>) -> bool {
    file_path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Decodes an image from raw file bytes into RGB8.
///
/// The format is guessed from the content. Grayscale inputs are replicated
/// across the three channels and alpha is dropped; 16-bit and float inputs
/// are reduced to 8 bits per channel.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of an encoded image.
pub fn decode_image_rgb8(bytes: &[u8]) -> Result<Image<u8, 3>, IoError> {
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Reads an image from the given file path as RGB8.
///
/// The method tries to read from any image format supported by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image with three channels (rgb8).
///
/// # Errors
///
/// * [`IoError::FileDoesNotExist`] when nothing exists at the path.
/// * [`IoError::FileError`] when the file cannot be read.
/// * [`IoError::ImageDecodeError`] when the content is corrupt or the format
///   is unsupported.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    let image = decode_image_rgb8(&bytes)?;

    log::debug!(
        "decoded {} ({}x{})",
        file_path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Writes an RGB8 image to the given file path.
///
/// The encoder is picked from the file extension, see [`SUPPORTED_EXTENSIONS`].
/// The channel bytes are written as they are: no color conversion happens here.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to encode.
///
/// # Errors
///
/// * [`IoError::InvalidFileExtension`] for a missing or unsupported extension.
/// * [`IoError::ImageEncodeError`] when encoding or writing fails.
pub fn write_image_any_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    if !has_supported_extension(file_path) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let format = image::ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
        format,
    )
    .map_err(IoError::ImageEncodeError)?;

    log::debug!("encoded {} as {:?}", file_path.display(), format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use chromascope_image::{Image, ImageSize};

    fn sample() -> Result<Image<u8, 3>, IoError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let data = (0..size.area() * 3).map(|i| (i * 13) as u8).collect();
        Ok(Image::new(size, data)?)
    }

    #[test]
    fn supported_extension() {
        assert!(super::has_supported_extension("a/b/c.PNG"));
        assert!(super::has_supported_extension("c.jpeg"));
        assert!(!super::has_supported_extension("c.gif"));
        assert!(!super::has_supported_extension("no_extension"));
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("sample.png");

        let image = sample()?;
        super::write_image_any_rgb8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = super::read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_write_lossless_formats() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let image = sample()?;

        for ext in ["bmp", "tiff"] {
            let file_path = tmp_dir.path().join(format!("sample.{ext}"));
            super::write_image_any_rgb8(&file_path, &image)?;
            assert_eq!(super::read_image_any_rgb8(&file_path)?, image);
        }

        Ok(())
    }

    #[test]
    fn write_jpeg_keeps_size() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("sample.jpg");

        super::write_image_any_rgb8(&file_path, &sample()?)?;
        let image_back = super::read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back.size().width, 3);
        assert_eq!(image_back.size().height, 2);

        Ok(())
    }

    #[test]
    fn write_unsupported_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("sample.xyz");

        let res = super::write_image_any_rgb8(&file_path, &sample()?);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        assert!(!file_path.exists());

        Ok(())
    }

    #[test]
    fn write_missing_directory() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("missing").join("sample.png");

        let res = super::write_image_any_rgb8(&file_path, &sample()?);
        assert!(matches!(res, Err(IoError::ImageEncodeError(_))));

        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = super::read_image_any_rgb8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_corrupt_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("corrupt.png");
        std::fs::write(&file_path, b"definitely not an image")?;

        let res = super::read_image_any_rgb8(&file_path);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));

        Ok(())
    }

    #[test]
    fn read_gray_and_rgba_as_rgb() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;

        let gray_path = tmp_dir.path().join("gray.png");
        image::GrayImage::from_raw(2, 1, vec![10, 20])
            .ok_or(IoError::InvalidFileExtension(gray_path.clone()))?
            .save(&gray_path)?;
        let gray = super::read_image_any_rgb8(&gray_path)?;
        assert_eq!(gray.as_slice(), &[10, 10, 10, 20, 20, 20]);

        let rgba_path = tmp_dir.path().join("rgba.png");
        image::RgbaImage::from_raw(1, 1, vec![1, 2, 3, 4])
            .ok_or(IoError::InvalidFileExtension(rgba_path.clone()))?
            .save(&rgba_path)?;
        let rgb = super::read_image_any_rgb8(&rgba_path)?;
        assert_eq!(rgb.as_slice(), &[1, 2, 3]);

        Ok(())
    }
}
