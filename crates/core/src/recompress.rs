//! Decode, downscale, and re-encode images as lossy JPEG.

use crate::alpha::flatten_to_rgb;
use crate::error::{RecompressError, Result};
use crate::media::ImageBytes;
use crate::scale::{fit_width, jpeg_quality, Dimensions};
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;
use tracing::debug;

/// Parameters for a recompression pass.
#[derive(Debug, Clone, Copy)]
pub struct CompressionParams {
    /// Maximum output width in pixels (height follows the aspect ratio).
    pub max_width: u32,
    /// Normalized JPEG quality factor in `[0, 1]`.
    pub quality: f32,
}

impl Default for CompressionParams {
    fn default() -> Self {
        Self {
            max_width: 1024,
            quality: 0.6,
        }
    }
}

impl CompressionParams {
    /// Validate parameter ranges.
    ///
    /// Out-of-range values fail fast rather than being silently clamped.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(RecompressError::InvalidParameter(
                "max_width must be greater than zero".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.quality) || !self.quality.is_finite() {
            return Err(RecompressError::InvalidParameter(format!(
                "quality must be within [0, 1], got {}",
                self.quality
            )));
        }
        Ok(())
    }
}

/// The outcome of a recompression pass: JPEG bytes plus their length.
#[derive(Debug, Clone)]
pub struct CompressedResult {
    /// Encoded JPEG payload.
    pub bytes: Vec<u8>,
    /// Payload length in bytes.
    pub size_bytes: usize,
}

impl CompressedResult {
    /// The output media type. Always JPEG, regardless of input format.
    pub fn media_type(&self) -> &'static str {
        "image/jpeg"
    }

    /// Payload size in kilobytes, for display surfaces.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Downscale an image to a maximum width and re-encode it as lossy JPEG.
///
/// The input's declared media type must begin with `image/`. The raster is
/// decoded, resampled with Lanczos3 when wider than `params.max_width`
/// (never upscaled), composited over white if it carries alpha, and encoded
/// as JPEG at the given quality.
///
/// The operation is pure: no filesystem or network access, and a fresh
/// result is produced per invocation.
///
/// # Errors
/// - [`RecompressError::InvalidInputKind`] if the media type is not `image/*`
/// - [`RecompressError::InvalidParameter`] if params are out of range
/// - [`RecompressError::Decode`] if the payload is corrupt or unsupported
/// - [`RecompressError::Encode`] if JPEG encoding fails
pub fn recompress(input: &ImageBytes, params: &CompressionParams) -> Result<CompressedResult> {
    if !input.is_image() {
        return Err(RecompressError::InvalidInputKind(
            input.media_type().to_string(),
        ));
    }
    params.validate()?;

    let img = image::load_from_memory(input.data()).map_err(RecompressError::Decode)?;

    let current = Dimensions::new(img.width(), img.height());
    let target = fit_width(current, params.max_width);

    let resized = if target != current {
        img.resize_exact(target.width, target.height, image::imageops::FilterType::Lanczos3)
    } else {
        img
    };

    let bytes = encode_jpeg(&resized, jpeg_quality(params.quality))?;

    debug!(
        input_bytes = input.size_bytes(),
        output_bytes = bytes.len(),
        width = target.width,
        height = target.height,
        "recompressed image"
    );

    let size_bytes = bytes.len();
    Ok(CompressedResult { bytes, size_bytes })
}

/// Decode an image payload and report its dimensions.
///
/// Shares [`recompress`]'s precondition on the declared media type.
pub fn probe(input: &ImageBytes) -> Result<Dimensions> {
    if !input.is_image() {
        return Err(RecompressError::InvalidInputKind(
            input.media_type().to_string(),
        ));
    }

    let img = image::load_from_memory(input.data()).map_err(RecompressError::Decode)?;
    Ok(Dimensions::new(img.width(), img.height()))
}

/// Encode a raster as JPEG at the encoder-scale quality.
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    // JPEG carries no alpha; flatten to RGB first.
    let rgb = DynamicImage::ImageRgb8(flatten_to_rgb(img));

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageOutputFormat::Jpeg(quality))
        .map_err(RecompressError::Encode)?;

    Ok(buffer.into_inner())
}
