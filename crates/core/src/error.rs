//! Error types for the recompression crate.

use thiserror::Error;

/// Result type alias for recompression operations.
pub type Result<T> = std::result::Result<T, RecompressError>;

/// Errors that can occur while recompressing an image.
///
/// All variants are terminal for the call that produced them; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum RecompressError {
    /// The declared media type is not an image type.
    #[error("not an image: declared media type is {0:?}")]
    InvalidInputKind(String),

    /// A compression parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The payload could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The resampled raster could not be encoded as JPEG.
    #[error("failed to encode JPEG: {0}")]
    Encode(#[source] image::ImageError),
}
