//! Roster upload.

use reqwest::StatusCode;
use reqwest::header::CONTENT_ENCODING;

use super::{ACCESS_TOKEN_HEADER, StudentClient};
use crate::compression::gzip_compress;
use crate::error::UploadError;
use crate::types::StudentRecord;

/// Serialize students to a JSON array and gzip it
///
/// The result is exactly the body sent by [`StudentClient::upload_students`].
pub fn encode_payload(students: &[StudentRecord]) -> Result<Vec<u8>, UploadError> {
    let json = serde_json::to_string(students)?;
    let compressed = gzip_compress(json.as_bytes()).map_err(UploadError::Compression)?;

    tracing::debug!(
        students = students.len(),
        json_bytes = json.len(),
        gzip_bytes = compressed.len(),
        "encoded upload payload"
    );

    Ok(compressed)
}

impl StudentClient {
    /// Upload students as a gzip-compressed JSON array
    ///
    /// Always sends exactly one PUT, even for an empty slice; deciding
    /// whether an upload is worthwhile is left to the caller.
    pub async fn upload_students(&self, students: &[StudentRecord]) -> Result<(), UploadError> {
        let body = encode_payload(students)?;

        let response = self
            .http
            .put(&self.config.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.config.token)
            .header(CONTENT_ENCODING, "gzip")
            .body(body)
            .send()
            .await
            .map_err(|e| UploadError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UploadError::HttpStatus(status.as_u16()));
        }

        Ok(())
    }
}
