//! Error types for student-sync
//!
//! The pipeline has three failure families, each with its own type so the
//! driver can decide how to report it:
//! - [`ParseError`] for a roster line that cannot become a record
//! - [`FetchError`] for the GET half of the pipeline
//! - [`UploadError`] for the PUT half of the pipeline
//!
//! [`Error`] wraps these together with configuration and client setup
//! failures for callers that want a single error type.

use thiserror::Error;

/// Result type alias for student-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for student-sync
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "endpoint")
        key: Option<String>,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Fetching the roster failed
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Uploading the roster failed
    #[error("upload error: {0}")]
    Upload(#[from] UploadError),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a specific key
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }
}

/// A roster line that could not be turned into a student record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line did not split into the expected number of fields
    #[error("expected {expected} comma-separated fields, found {found}")]
    WrongFieldCount {
        /// Number of fields a record requires
        expected: usize,
        /// Number of fields actually present on the line
        found: usize,
    },
}

/// Errors from fetching the student roster
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response, or the body could not be read
    #[error("failed to fetch students: {0}")]
    NetworkFailure(String),

    /// The server answered with something other than 200 OK
    #[error("failed to fetch students, status code: {0}")]
    HttpStatus(u16),

    /// A roster line was malformed and the fail-fast policy is active
    #[error("malformed student record on line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number within the response body
        line: usize,
        /// Why the line was rejected
        #[source]
        source: ParseError,
    },
}

/// Errors from uploading the sorted roster
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request never produced a response
    #[error("failed to upload students: {0}")]
    NetworkFailure(String),

    /// The server answered with something other than 200 OK
    #[error("failed to upload students, status code: {0}")]
    HttpStatus(u16),

    /// The roster could not be serialized to JSON
    #[error("failed to serialize students: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The JSON payload could not be gzip-compressed
    #[error("failed to compress payload: {0}")]
    Compression(#[source] std::io::Error),
}

impl FetchError {
    /// HTTP status code, if the server responded at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl UploadError {
    /// HTTP status code, if the server responded at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UploadError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}
