//! Image payloads and media type sniffing.

/// An immutable binary payload together with its declared media type.
///
/// The media type is the source of truth for whether the payload is treated
/// as an image at all; the bytes are only decoded after that check passes.
#[derive(Debug, Clone)]
pub struct ImageBytes {
    data: Vec<u8>,
    media_type: String,
}

impl ImageBytes {
    /// Wrap a payload with an explicitly declared media type.
    pub fn new(data: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            data,
            media_type: media_type.into(),
        }
    }

    /// Wrap a payload, sniffing the media type from its magic bytes.
    ///
    /// Payloads with no recognizable image signature are declared as
    /// `application/octet-stream`, which downstream operations reject.
    pub fn sniffed(data: Vec<u8>) -> Self {
        let media_type = sniff_media_type(&data).unwrap_or("application/octet-stream");
        Self::new(data, media_type)
    }

    /// The raw payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The declared media type, e.g. `image/png`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Whether the declared media type is an image type.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    /// Payload length in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Sniff a media type from magic bytes.
///
/// Recognizes the formats a browser file input would commonly hand over.
/// Returns `None` when no known image signature matches.
///
/// # Example
/// ```
/// use pixpress_core::sniff_media_type;
///
/// let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
/// assert_eq!(sniff_media_type(&png_header), Some("image/png"));
/// ```
pub fn sniff_media_type(data: &[u8]) -> Option<&'static str> {
    if data.len() < 4 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // WebP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    // TIFF: II or MM (little/big endian)
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        return Some("image/tiff");
    }

    None
}
