use chromascope_image::{ColorSpace, ImageError};
use chromascope_io::IoError;

/// Errors reported back to the user action that triggered them.
///
/// None of them leave the store in an inconsistent state; the action can be
/// retried as is.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The image could not be read or decoded.
    #[error("Failed to load image: {0}")]
    Decode(#[source] IoError),

    /// The image could not be encoded or written.
    #[error("Failed to save image: {0}")]
    Encode(#[source] IoError),

    /// An operation needs a loaded image.
    #[error("Please load an image first")]
    NoImageLoaded,

    /// An operation needs a buffer that has not been converted yet.
    #[error("No {0} image available, convert the image first")]
    NoDerivedBufferAvailable(ColorSpace),

    /// A channel name that the color space does not have.
    #[error("Unknown channel '{name}' for {space}")]
    UnknownChannel {
        /// The name that was asked for.
        name: String,
        /// The color space it was looked up in.
        space: ColorSpace,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    ConfigRead(#[source] std::io::Error),

    /// The configuration file is not valid.
    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// An image operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}
