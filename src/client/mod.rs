//! HTTP client for the roster endpoint, split into focused submodules.
//!
//! The `StudentClient` struct and its methods are organized by direction:
//! - [`fetch`] - GET the roster and parse it into sorted records
//! - [`upload`] - serialize, gzip and PUT the sorted records back

mod fetch;
mod upload;

pub use upload::encode_payload;

use crate::config::Config;
use crate::error::Result;

/// Header carrying the access token on every request
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Client bound to a single roster endpoint (cloneable - the HTTP pool is shared)
#[derive(Clone, Debug)]
pub struct StudentClient {
    /// Pooled HTTP client; connections are released when the last clone drops
    pub(crate) http: reqwest::Client,
    /// Endpoint, token and parsing settings
    pub(crate) config: Config,
}

impl StudentClient {
    /// Validate `config` and build a client for it
    ///
    /// A configured `request_timeout` applies to both the GET and the PUT.
    /// Without one, requests wait as long as the server takes.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Roster endpoint used for both GET and PUT
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
