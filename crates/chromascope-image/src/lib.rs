#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for color inspection.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Color space tags and channel naming.
pub mod color_spaces;

pub use crate::color_spaces::{ColorSpace, ParseColorSpaceError};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
