use chromascope_image::{ColorSpace, Image, ImageError, ImageSize};
use chromascope_imgproc::{
    color,
    fit::{self, Placement},
    interpolation::InterpolationMode,
    normalize, resize,
};

use crate::buffer::ColorBuffer;
use crate::selection::{ChannelFilter, DisplayMode, DisplaySelection};

/// A viewable RGB raster scaled to fit a viewport, with its placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    /// The raster at the fitted size.
    pub raster: Image<u8, 3>,
    /// Where the raster lands inside the viewport.
    pub placement: Placement,
}

impl Rendered {
    /// Column and row of the top-left corner of the raster in the viewport.
    pub fn offset(&self) -> (usize, usize) {
        (self.placement.offset_x, self.placement.offset_y)
    }
}

/// Turn a buffer into a viewable RGB raster at the buffer's own size.
///
/// * `All` with `Converted`: the inverse transform back to RGB.
/// * `All` with `Raw`: every channel min-max normalized on its own.
/// * A single channel: the plane, normalized unless the buffer is RGB, then
///   replicated into three channels.
///
/// The display mode has no effect on RGB buffers.
pub fn render_native(
    buffer: &ColorBuffer,
    channel: ChannelFilter,
    mode: DisplayMode,
) -> Result<Image<u8, 3>, ImageError> {
    let src = buffer.image();
    let is_rgb = buffer.space() == ColorSpace::Rgb;

    let Some(index) = channel.index() else {
        if is_rgb || mode == DisplayMode::Converted {
            return buffer.to_rgb();
        }

        let mut raster = Image::<u8, 3>::from_size_val(src.size(), 0)?;
        normalize::normalize_min_max_u8(src, &mut raster)?;
        return Ok(raster);
    };

    let plane = src.channel(index)?;

    let plane = if is_rgb {
        plane
    } else {
        let mut normalized = Image::<u8, 1>::from_size_val(plane.size(), 0)?;
        normalize::normalize_min_max_u8(&plane, &mut normalized)?;
        normalized
    };

    let mut raster = Image::<u8, 3>::from_size_val(plane.size(), 0)?;
    color::rgb_from_gray(&plane, &mut raster)?;

    Ok(raster)
}

/// Run the channel-display pipeline with bilinear resampling.
///
/// # Arguments
///
/// * `buffer` - The buffer to show.
/// * `channel` - Which channels to show.
/// * `mode` - How to show a non-RGB buffer.
/// * `viewport` - The size of the drawing area.
///
/// # Errors
///
/// Returns [`ImageError::ZeroSizedImage`] if the viewport or the buffer has a
/// zero dimension.
///
/// # Example
///
/// ```
/// use chromascope::image::{ColorSpace, Image, ImageSize};
/// use chromascope::{convert, render_for_display, ChannelFilter, DisplayMode};
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 2 }, 100).unwrap();
/// let lab = convert(&image, ColorSpace::Lab).unwrap();
///
/// let rendered = render_for_display(
///     &lab,
///     ChannelFilter::First,
///     DisplayMode::Converted,
///     ImageSize { width: 8, height: 8 },
/// )
/// .unwrap();
///
/// assert_eq!(rendered.raster.size(), ImageSize { width: 8, height: 4 });
/// assert_eq!(rendered.offset(), (0, 2));
/// ```
pub fn render_for_display(
    buffer: &ColorBuffer,
    channel: ChannelFilter,
    mode: DisplayMode,
    viewport: ImageSize,
) -> Result<Rendered, ImageError> {
    render_for_display_with(buffer, channel, mode, viewport, InterpolationMode::Bilinear)
}

/// Run the channel-display pipeline with the given resampling.
pub fn render_for_display_with(
    buffer: &ColorBuffer,
    channel: ChannelFilter,
    mode: DisplayMode,
    viewport: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Rendered, ImageError> {
    let placement = fit::fit_to_viewport(buffer.size(), viewport)?;
    let native = render_native(buffer, channel, mode)?;

    let mut raster = Image::<u8, 3>::from_size_val(placement.size, 0)?;
    resize::resize_native(&native, &mut raster, interpolation)?;

    log::debug!(
        "rendered {} {:?} {:?}: {}x{} -> {}x{} at ({}, {})",
        buffer.space(),
        channel,
        mode,
        placement.source.width,
        placement.source.height,
        placement.size.width,
        placement.size.height,
        placement.offset_x,
        placement.offset_y,
    );

    Ok(Rendered { raster, placement })
}

/// Run the pipeline for a [`DisplaySelection`].
pub fn render_selection(
    buffer: &ColorBuffer,
    selection: &DisplaySelection,
    viewport: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Rendered, ImageError> {
    render_for_display_with(
        buffer,
        selection.channel,
        selection.mode,
        viewport,
        interpolation,
    )
}

/// Paint a rendered raster at its offset onto a viewport-sized canvas filled
/// with `background`.
pub fn compose_on_canvas(
    rendered: &Rendered,
    background: [u8; 3],
) -> Result<Image<u8, 3>, ImageError> {
    let viewport = rendered.placement.viewport;
    let (offset_x, offset_y) = rendered.offset();
    let raster = &rendered.raster;

    let data = background
        .iter()
        .copied()
        .cycle()
        .take(viewport.area() * 3)
        .collect();
    let mut canvas = Image::<u8, 3>::new(viewport, data)?;

    let row_len = raster.width() * 3;
    let canvas_stride = viewport.width * 3;
    let canvas_data = canvas.as_slice_mut();

    for (y, row) in raster.as_slice().chunks_exact(row_len).enumerate() {
        let start = (offset_y + y) * canvas_stride + offset_x * 3;
        canvas_data[start..start + row_len].copy_from_slice(row);
    }

    Ok(canvas)
}
