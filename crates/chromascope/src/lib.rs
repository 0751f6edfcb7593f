#![deny(missing_docs)]
//! Load a raster image, convert it between RGB, CIELab and HSV, and prepare
//! per-channel views of it for display.
//!
//! The crate is split into pure functions ([`buffer::convert`],
//! [`pipeline::render_for_display`], [`readout::pixel_at`],
//! [`export::save_buffer`]) and a small state holder, [`store::ImageStore`],
//! that a presentation layer drives one user action at a time.

#[doc(inline)]
pub use chromascope_image as image;

#[doc(inline)]
pub use chromascope_imgproc as imgproc;

#[doc(inline)]
pub use chromascope_io as io;

/// Color buffers and color space conversion.
pub mod buffer;

/// Viewer configuration.
pub mod config;

/// Error type shared by the store and the adapters.
pub mod error;

/// Writing buffers to disk.
pub mod export;

/// Channel-display pipeline.
pub mod pipeline;

/// Hover readout.
pub mod readout;

/// Display selection state.
pub mod selection;

/// Image store holding the source and derived buffers.
pub mod store;

pub use crate::buffer::{convert, ColorBuffer};
pub use crate::config::ViewerConfig;
pub use crate::error::Error;
pub use crate::export::{save_buffer, SaveMode};
pub use crate::pipeline::{render_for_display, Rendered};
pub use crate::readout::{pixel_at, PixelValue};
pub use crate::selection::{ChannelFilter, DisplayMode, DisplaySelection};
pub use crate::store::ImageStore;
