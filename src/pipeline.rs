//! Fetch-sort-upload driver
//!
//! [`run`] performs one sync: fetch the roster, and if anything came back,
//! upload it. Upload never starts before fetch has finished, and failures
//! on either side are logged here and reported through [`PipelineOutcome`]
//! instead of being propagated.

use crate::client::StudentClient;
use crate::error::{FetchError, UploadError};

/// What a single [`run`] ended up doing
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Students were fetched, sorted and accepted by the server
    Uploaded {
        /// Number of students in the upload
        count: usize,
    },
    /// The fetch succeeded but returned no students, so no upload was attempted
    NothingToUpload,
    /// The fetch failed; no upload was attempted
    FetchFailed(FetchError),
    /// Students were fetched but the upload failed
    UploadFailed {
        /// Number of students that were sent
        count: usize,
        /// Why the upload failed
        error: UploadError,
    },
}

impl PipelineOutcome {
    /// True only when the sorted roster reached the server
    pub fn is_uploaded(&self) -> bool {
        matches!(self, PipelineOutcome::Uploaded { .. })
    }

    /// True when an upload request was issued, whatever its result
    pub fn attempted_upload(&self) -> bool {
        matches!(
            self,
            PipelineOutcome::Uploaded { .. } | PipelineOutcome::UploadFailed { .. }
        )
    }
}

/// Run one fetch-then-upload cycle against the client's endpoint
pub async fn run(client: &StudentClient) -> PipelineOutcome {
    tracing::info!(endpoint = %client.endpoint(), "fetching students");

    let students = match client.fetch_students().await {
        Ok(students) => students,
        Err(error) => {
            log_fetch_failure(&error);
            return PipelineOutcome::FetchFailed(error);
        }
    };

    if students.is_empty() {
        tracing::info!("no students fetched, skipping upload");
        return PipelineOutcome::NothingToUpload;
    }

    let count = students.len();
    tracing::info!(count, "fetched and sorted students");

    match client.upload_students(&students).await {
        Ok(()) => {
            tracing::info!(count, "students uploaded successfully");
            PipelineOutcome::Uploaded { count }
        }
        Err(error) => {
            log_upload_failure(&error);
            PipelineOutcome::UploadFailed { count, error }
        }
    }
}

fn log_fetch_failure(error: &FetchError) {
    match error {
        FetchError::HttpStatus(status) => {
            tracing::warn!(status, "failed to fetch students");
        }
        FetchError::NetworkFailure(message) => {
            tracing::error!(error = %message, "failed to fetch students");
        }
        FetchError::MalformedRecord { line, source } => {
            tracing::error!(line, error = %source, "failed to fetch students: malformed record");
        }
    }
}

fn log_upload_failure(error: &UploadError) {
    match error {
        UploadError::HttpStatus(status) => {
            tracing::warn!(status, "failed to upload students");
        }
        other => {
            tracing::error!(error = %other, "failed to upload students");
        }
    }
}
