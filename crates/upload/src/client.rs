//! Multipart upload client implementation.

use crate::error::{UploadError, UploadResult};
use pixpress_core::CompressedResult;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Multipart form field carrying the compressed image
const FIELD_NAME: &str = "compressed_image";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Successful upload acknowledgement from the server.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadAck {
    /// Human-readable message returned by the server.
    pub message: String,
}

/// Upload client for recompressed images.
///
/// Wraps `reqwest` and adds request correlation IDs for tracing. Retries
/// and backoff are a caller concern and are intentionally absent.
#[derive(Clone)]
pub struct UploadClient {
    inner: Client,
    endpoint: Url,
}

impl UploadClient {
    /// Create a client targeting the given upload endpoint.
    pub fn new(endpoint: &str) -> UploadResult<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| UploadError::InvalidUrl(endpoint.to_string()))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static("pixpress-upload/0.1"));

        let inner = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .default_headers(default_headers)
            .build()
            .map_err(UploadError::Request)?;

        Ok(Self { inner, endpoint })
    }

    /// The configured upload endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Upload a compressed image under its original filename.
    ///
    /// The payload goes into a multipart field named `compressed_image`
    /// with the original filename and an `image/jpeg` part type. A success
    /// response is parsed as JSON with a `message` field; any non-success
    /// status becomes an [`UploadError::Response`] carrying the response
    /// body when the server sent one, otherwise the status text.
    #[instrument(skip(self, result), fields(request_id))]
    pub async fn upload(&self, result: &CompressedResult, filename: &str) -> UploadResult<UploadAck> {
        let request_id = Uuid::new_v4().to_string();

        let part = Part::bytes(result.bytes.clone())
            .file_name(filename.to_string())
            .mime_str(result.media_type())
            .map_err(UploadError::Request)?;
        let form = Form::new().part(FIELD_NAME, part);

        debug!(
            request_id = %request_id,
            endpoint = %self.endpoint,
            filename = %filename,
            payload_bytes = result.size_bytes,
            "uploading compressed image"
        );

        let response = self
            .inner
            .post(self.endpoint.clone())
            .header(X_REQUEST_ID, &request_id)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let ack: UploadAck = response.json().await.map_err(UploadError::Request)?;
            debug!(request_id = %request_id, message = %ack.message, "upload acknowledged");
            Ok(ack)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(UploadError::response(
                status.as_u16(),
                failure_message(status, &body),
            ))
        }
    }
}

/// Pick the user-visible message for a failed upload.
///
/// Servers often return an error detail in the body; prefer that, and fall
/// back to the status reason phrase when the body is empty.
fn failure_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}
