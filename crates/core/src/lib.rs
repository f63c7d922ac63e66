//! Image downscaling and recompression for Pixpress.
//!
//! This crate provides:
//! - Media type sniffing from magic bytes
//! - Width-bounded downscaling with aspect ratio preserved
//! - Lossy JPEG re-encoding at a normalized quality factor
//! - Dimension probing for inspection tooling
//!
//! The central operation is [`recompress`]: decode, resample, re-encode.
//! It is pure and stateless; concurrent calls share nothing mutable.

#![warn(missing_docs)]

mod alpha;
mod error;
mod media;
mod recompress;
pub mod scale;

pub use error::{RecompressError, Result};
pub use media::{sniff_media_type, ImageBytes};
pub use recompress::{probe, recompress, CompressedResult, CompressionParams};
pub use scale::Dimensions;
