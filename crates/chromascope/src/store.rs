use std::path::{Path, PathBuf};

use chromascope_image::{ColorSpace, Image, ImageSize};
use chromascope_io::functional as F;

use crate::buffer::{self, ColorBuffer};
use crate::config::ViewerConfig;
use crate::error::Error;
use crate::export::{self, SaveMode};
use crate::pipeline::{self, Rendered};
use crate::readout::{self, PixelValue};
use crate::selection::DisplaySelection;

/// Status line text before anything is loaded.
pub const STATUS_READY: &str = "Ready to load image";

/// Holds the loaded source image and the CIELab and HSV buffers derived
/// from it.
///
/// Derived buffers exist only while a source does, always have its size, and
/// are dropped whenever a new source replaces it.
///
/// # Example
///
/// ```no_run
/// use chromascope::image::{ColorSpace, ImageSize};
/// use chromascope::{DisplaySelection, ImageStore};
///
/// let mut store = ImageStore::default();
/// store.load("photo.jpg")?;
/// store.convert(ColorSpace::Hsv)?;
///
/// let viewport = ImageSize { width: 640, height: 480 };
/// let rendered = store.render(&DisplaySelection::new(ColorSpace::Hsv), viewport)?;
/// println!("{} at {:?}", store.status(), rendered.offset());
/// # Ok::<(), chromascope::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ImageStore {
    config: ViewerConfig,
    source: Option<ColorBuffer>,
    source_path: Option<PathBuf>,
    lab: Option<ColorBuffer>,
    hsv: Option<ColorBuffer>,
}

impl ImageStore {
    /// Create an empty store with the given configuration.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Decode the file at `file_path` and make it the source image.
    ///
    /// On failure the store keeps whatever it held before.
    pub fn load(&mut self, file_path: impl AsRef<Path>) -> Result<(), Error> {
        let file_path = file_path.as_ref();
        let image = F::read_image_any_rgb8(file_path).map_err(Error::Decode)?;

        log::info!(
            "loaded {} ({}x{})",
            file_path.display(),
            image.width(),
            image.height()
        );

        self.set_source(image);
        self.source_path = Some(file_path.to_path_buf());

        Ok(())
    }

    /// Replace the source image with an already decoded one.
    pub fn set_source(&mut self, image: Image<u8, 3>) {
        self.source = Some(ColorBuffer::rgb(image));
        self.source_path = None;
        self.lab = None;
        self.hsv = None;
    }

    /// The source image, if one is loaded.
    pub fn source(&self) -> Option<&Image<u8, 3>> {
        self.source.as_ref().map(ColorBuffer::image)
    }

    /// Whether a source image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Status line text.
    pub fn status(&self) -> String {
        match (&self.source, &self.source_path) {
            (Some(_), Some(path)) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy());
                format!("Loaded: {name}")
            }
            (Some(source), None) => format!(
                "Loaded: {}x{} image",
                source.size().width,
                source.size().height
            ),
            (None, _) => STATUS_READY.to_string(),
        }
    }

    /// Compute the buffer for `space` from the source, replacing any
    /// previous one. Converting to RGB only checks that a source exists.
    pub fn convert(&mut self, space: ColorSpace) -> Result<&ColorBuffer, Error> {
        let source = self.source.as_ref().ok_or(Error::NoImageLoaded)?;

        let slot = match space {
            ColorSpace::Rgb => return Ok(source),
            ColorSpace::Lab => &mut self.lab,
            ColorSpace::Hsv => &mut self.hsv,
        };

        let converted = buffer::convert(source.image(), space)?;
        log::info!(
            "converted {}x{} image to {space}",
            converted.size().width,
            converted.size().height
        );

        let converted: &ColorBuffer = slot.insert(converted);
        Ok(converted)
    }

    /// The buffer for `space`.
    ///
    /// # Errors
    ///
    /// * [`Error::NoImageLoaded`] for RGB without a source.
    /// * [`Error::NoDerivedBufferAvailable`] for a space not converted yet.
    pub fn buffer(&self, space: ColorSpace) -> Result<&ColorBuffer, Error> {
        let slot = match space {
            ColorSpace::Rgb => return self.source.as_ref().ok_or(Error::NoImageLoaded),
            ColorSpace::Lab => &self.lab,
            ColorSpace::Hsv => &self.hsv,
        };

        slot.as_ref().ok_or(Error::NoDerivedBufferAvailable(space))
    }

    /// Run the display pipeline for `selection`.
    ///
    /// A viewport dimension ≤ 1 is replaced by the configured default.
    pub fn render(
        &self,
        selection: &DisplaySelection,
        viewport: ImageSize,
    ) -> Result<Rendered, Error> {
        let buffer = self.buffer(selection.space)?;
        let viewport = self.config.resolve_viewport(viewport);

        Ok(pipeline::render_selection(
            buffer,
            selection,
            viewport,
            self.config.interpolation,
        )?)
    }

    /// Run the display pipeline and paint the result onto a viewport-sized
    /// canvas in the configured background color.
    pub fn compose(
        &self,
        selection: &DisplaySelection,
        viewport: ImageSize,
    ) -> Result<Image<u8, 3>, Error> {
        let rendered = self.render(selection, viewport)?;
        Ok(pipeline::compose_on_canvas(
            &rendered,
            self.config.background,
        )?)
    }

    /// The value under viewport coordinate `(x, y)` for `selection`.
    ///
    /// `Ok(None)` means the pointer is outside the image.
    pub fn pixel_at(
        &self,
        selection: &DisplaySelection,
        x: f64,
        y: f64,
        viewport: ImageSize,
    ) -> Result<Option<PixelValue>, Error> {
        let buffer = self.buffer(selection.space)?;
        let viewport = self.config.resolve_viewport(viewport);

        Ok(readout::pixel_at(buffer, selection.channel, x, y, viewport))
    }

    /// Readout text for viewport coordinate `(x, y)`. Without the buffer to
    /// read from, the placeholder is shown.
    pub fn readout(
        &self,
        selection: &DisplaySelection,
        x: f64,
        y: f64,
        viewport: ImageSize,
    ) -> String {
        let value = self.pixel_at(selection, x, y, viewport).ok().flatten();
        readout::readout_text(value.as_ref())
    }

    /// Write the buffer for `space` to `file_path`.
    ///
    /// A path without an extension gets the configured default one. The
    /// path actually written is returned. Nothing is written when the
    /// buffer does not exist.
    pub fn save(
        &self,
        space: ColorSpace,
        file_path: impl AsRef<Path>,
        mode: SaveMode,
    ) -> Result<PathBuf, Error> {
        let buffer = self.buffer(space)?;
        let file_path = self.config.with_default_extension(file_path);

        export::save_buffer(buffer, &file_path, mode).map_err(Error::Encode)?;
        log::info!("saved {space} ({mode:?}) to {}", file_path.display());

        Ok(file_path)
    }

    /// Write the source image to `file_path`.
    pub fn save_source(&self, file_path: impl AsRef<Path>) -> Result<PathBuf, Error> {
        self.save(ColorSpace::Rgb, file_path, SaveMode::Raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageStore, STATUS_READY};
    use crate::error::Error;
    use crate::selection::{ChannelFilter, DisplayMode, DisplaySelection};
    use chromascope_image::{ColorSpace, Image, ImageSize};

    fn image(width: usize, height: usize) -> Result<Image<u8, 3>, Error> {
        let data = (0..width * height * 3).map(|i| (i * 7) as u8).collect();
        Ok(Image::new(ImageSize { width, height }, data)?)
    }

    #[test]
    fn empty_store() {
        let store = ImageStore::default();
        assert!(!store.is_loaded());
        assert_eq!(store.status(), STATUS_READY);
        assert!(matches!(
            store.buffer(ColorSpace::Rgb),
            Err(Error::NoImageLoaded)
        ));
        assert!(matches!(
            store.buffer(ColorSpace::Lab),
            Err(Error::NoDerivedBufferAvailable(ColorSpace::Lab))
        ));
    }

    #[test]
    fn convert_requires_source() {
        let mut store = ImageStore::default();
        for space in ColorSpace::ALL {
            assert!(matches!(store.convert(space), Err(Error::NoImageLoaded)));
        }
    }

    #[test]
    fn derived_buffers_follow_source() -> Result<(), Error> {
        let mut store = ImageStore::default();
        store.set_source(image(3, 2)?);

        store.convert(ColorSpace::Lab)?;
        store.convert(ColorSpace::Hsv)?;
        assert_eq!(store.buffer(ColorSpace::Lab)?.size(), ImageSize { width: 3, height: 2 });
        assert_eq!(store.buffer(ColorSpace::Hsv)?.space(), ColorSpace::Hsv);

        store.set_source(image(5, 5)?);
        assert!(matches!(
            store.buffer(ColorSpace::Lab),
            Err(Error::NoDerivedBufferAvailable(ColorSpace::Lab))
        ));
        assert!(matches!(
            store.buffer(ColorSpace::Hsv),
            Err(Error::NoDerivedBufferAvailable(ColorSpace::Hsv))
        ));
        assert_eq!(store.status(), "Loaded: 5x5 image");

        Ok(())
    }

    #[test]
    fn render_uses_default_viewport() -> Result<(), Error> {
        let mut store = ImageStore::default();
        store.set_source(image(4, 3)?);

        let selection = DisplaySelection::new(ColorSpace::Rgb);
        let rendered = store.render(&selection, ImageSize { width: 1, height: 1 })?;
        assert_eq!(rendered.placement.viewport, ImageSize { width: 800, height: 600 });
        assert_eq!(rendered.raster.size(), ImageSize { width: 800, height: 600 });

        let canvas = store.compose(&selection, ImageSize { width: 8, height: 3 })?;
        assert_eq!(canvas.size(), ImageSize { width: 8, height: 3 });
        assert_eq!(canvas.pixel(0, 0)?, [255, 255, 255]);

        Ok(())
    }

    #[test]
    fn render_missing_derived_buffer() -> Result<(), Error> {
        let mut store = ImageStore::default();
        store.set_source(image(4, 3)?);

        let selection = DisplaySelection::new(ColorSpace::Hsv)
            .with_channel(ChannelFilter::First)
            .with_mode(DisplayMode::Raw);
        let viewport = ImageSize { width: 10, height: 10 };

        assert!(matches!(
            store.render(&selection, viewport),
            Err(Error::NoDerivedBufferAvailable(ColorSpace::Hsv))
        ));
        assert_eq!(
            store.readout(&selection, 5.0, 5.0, viewport),
            crate::readout::HOVER_PLACEHOLDER
        );

        store.convert(ColorSpace::Hsv)?;
        assert!(store.render(&selection, viewport).is_ok());

        Ok(())
    }
}
