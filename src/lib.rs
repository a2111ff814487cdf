//! # student-sync
//!
//! Pulls a line-delimited student roster from an HTTP endpoint, sorts it by
//! first name, and pushes it back to the same endpoint as gzip-compressed
//! JSON.
//!
//! ## Pipeline
//!
//! - **Fetch** - `GET` with an `x-access-token` header; each non-blank line
//!   of a 200 response becomes a [`StudentRecord`] (`id,first_name,last_name,email,ip_address`)
//! - **Sort** - stable, byte-wise ascending by `first_name`
//! - **Upload** - JSON array, gzip, `PUT` with `Content-Encoding: gzip`
//!
//! Upload only runs when the fetch returned at least one student.
//!
//! ## Quick Start
//!
//! ```no_run
//! use student_sync::{Config, StudentClient, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("https://roster.example.com/data", "access-token");
//!     let client = StudentClient::new(config)?;
//!
//!     let outcome = pipeline::run(&client).await;
//!     println!("{outcome:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Driving the steps yourself
//!
//! [`FetchError`] and [`UploadError`] convert into [`Error`], so the two
//! halves compose with `?` when a failure should abort the caller:
//!
//! ```no_run
//! use student_sync::StudentClient;
//!
//! async fn sync_once(client: &StudentClient) -> student_sync::Result<usize> {
//!     let students = client.fetch_students().await?;
//!     if !students.is_empty() {
//!         client.upload_students(&students).await?;
//!     }
//!     Ok(students.len())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// HTTP client for the roster endpoint
pub mod client;
/// Gzip helpers for upload payloads
pub mod compression;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// Fetch-then-upload driver
pub mod pipeline;
/// Roster body parsing and ordering
pub mod roster;
/// Core types
pub mod types;

// Re-export commonly used types
pub use client::{StudentClient, encode_payload};
pub use config::{Config, MalformedLinePolicy};
pub use error::{Error, FetchError, ParseError, Result, UploadError};
pub use pipeline::{PipelineOutcome, run};
pub use roster::{ParseOptions, parse_students, sort_by_first_name};
pub use types::StudentRecord;
