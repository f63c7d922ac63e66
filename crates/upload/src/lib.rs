//! Upload client for recompressed images.
//!
//! Packages a [`pixpress_core::CompressedResult`] into a multipart form and
//! POSTs it to an application-defined endpoint. Transport failures live in
//! their own error taxonomy, separate from compression failures; nothing is
//! retried here.

#![warn(missing_docs)]

mod client;
mod error;

pub use client::{UploadAck, UploadClient};
pub use error::{UploadError, UploadResult};
