use std::fmt;

use serde::Serialize;

use chromascope_image::{ColorSpace, ImageSize};
use chromascope_imgproc::fit;

use crate::buffer::ColorBuffer;
use crate::selection::ChannelFilter;

/// Text shown while the pointer is not over the image.
pub const HOVER_PLACEHOLDER: &str = "Hover over image to see RGB values";

/// The stored value under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PixelValue {
    /// All three channels of a pixel.
    Color {
        /// Space of the values.
        space: ColorSpace,
        /// Source column.
        x: usize,
        /// Source row.
        y: usize,
        /// Stored 8-bit values.
        values: [u8; 3],
    },
    /// A single channel of a pixel.
    Channel {
        /// Space of the value.
        space: ColorSpace,
        /// Channel index.
        channel: usize,
        /// Source column.
        x: usize,
        /// Source row.
        y: usize,
        /// Stored 8-bit value.
        value: u8,
    },
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PixelValue::Color {
                space: ColorSpace::Rgb,
                x,
                y,
                values: [r, g, b],
            } => write!(
                f,
                "RGB({r}, {g}, {b}) | Hex: #{r:02x}{g:02x}{b:02x} | Position({x}, {y})"
            ),
            PixelValue::Color {
                space,
                x,
                y,
                values: [c1, c2, c3],
            } => {
                let prefix = match space {
                    ColorSpace::Lab => "Lab",
                    _ => space.name(),
                };
                write!(f, "{prefix}({c1}, {c2}, {c3}) | Position({x}, {y})")
            }
            PixelValue::Channel {
                space,
                channel,
                x,
                y,
                value,
            } => {
                let label = space.channel_labels().get(channel).copied().unwrap_or("?");
                write!(f, "{label} Channel: {value} | Position({x}, {y})")
            }
        }
    }
}

/// Look up the buffer value shown at viewport coordinate `(x, y)`.
///
/// The coordinate is mapped back through the same fit used by
/// [`crate::pipeline::render_for_display`]. Returns `None` on the letterbox
/// margins, outside the viewport, and for an empty viewport.
///
/// # Example
///
/// ```
/// use chromascope::image::{Image, ImageSize};
/// use chromascope::{pixel_at, ChannelFilter, ColorBuffer};
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 2, height: 1 }, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// let buffer = ColorBuffer::rgb(image);
/// let viewport = ImageSize { width: 4, height: 4 };
///
/// let value = pixel_at(&buffer, ChannelFilter::All, 3.0, 2.0, viewport).unwrap();
/// assert_eq!(value.to_string(), "RGB(0, 0, 255) | Hex: #0000ff | Position(1, 0)");
///
/// assert!(pixel_at(&buffer, ChannelFilter::All, 3.0, 0.5, viewport).is_none());
/// ```
pub fn pixel_at(
    buffer: &ColorBuffer,
    channel: ChannelFilter,
    x: f64,
    y: f64,
    viewport: ImageSize,
) -> Option<PixelValue> {
    let placement = fit::fit_to_viewport(buffer.size(), viewport).ok()?;
    let (src_x, src_y) = placement.to_source(x, y)?;
    let values = buffer.image().pixel(src_x, src_y).ok()?;
    let space = buffer.space();

    Some(match channel.index() {
        None => PixelValue::Color {
            space,
            x: src_x,
            y: src_y,
            values,
        },
        Some(channel) => PixelValue::Channel {
            space,
            channel,
            x: src_x,
            y: src_y,
            value: values[channel],
        },
    })
}

/// Status text for a readout: the value, or [`HOVER_PLACEHOLDER`].
pub fn readout_text(value: Option<&PixelValue>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => HOVER_PLACEHOLDER.to_string(),
    }
}
