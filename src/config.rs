//! Configuration types for student-sync
//!
//! A [`Config`] can be built in code or assembled by [`Config::load`] from a
//! TOML file, `STUDENT_SYNC_*` environment variables and [`CliOverrides`].
//! Layers are applied in the order defaults, file, environment, command
//! line, and callers finish with [`Config::validate`] before handing it to a
//! client.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Environment variable holding the roster endpoint URL
pub const ENV_ENDPOINT: &str = "STUDENT_SYNC_ENDPOINT";
/// Environment variable holding the access token
pub const ENV_TOKEN: &str = "STUDENT_SYNC_TOKEN";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "STUDENT_SYNC_TIMEOUT_SECS";
/// Environment variable selecting the malformed line policy ("skip" or "fail")
pub const ENV_MALFORMED_LINES: &str = "STUDENT_SYNC_MALFORMED_LINES";
/// Environment variable toggling header skipping ("true"/"false"/"1"/"0")
pub const ENV_SKIP_HEADER: &str = "STUDENT_SYNC_SKIP_HEADER";

/// How a roster line with the wrong number of fields is handled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedLinePolicy {
    /// Log a warning and drop the line (default)
    #[default]
    Skip,
    /// Abort the whole fetch with an error
    Fail,
}

impl std::str::FromStr for MalformedLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(format!("unknown malformed line policy '{other}'")),
        }
    }
}

/// Connection and parsing settings for one roster endpoint
///
/// The same URL serves the roster on GET and accepts the sorted upload on PUT.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Roster endpoint URL (http or https)
    #[serde(default)]
    pub endpoint: String,

    /// Value sent in the `x-access-token` header
    #[serde(default)]
    pub token: String,

    /// Per-request timeout in seconds (None = no timeout)
    #[serde(default, with = "optional_duration_serde")]
    pub request_timeout: Option<Duration>,

    /// What to do with lines that do not have five fields
    #[serde(default)]
    pub malformed_lines: MalformedLinePolicy,

    /// Treat the first line of the roster as a header and drop it
    #[serde(default)]
    pub skip_header: bool,
}

// Hand-written so the token never ends up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("malformed_lines", &self.malformed_lines)
            .field("skip_header", &self.skip_header)
            .finish()
    }
}

impl Config {
    /// Create a configuration with defaults for everything but the endpoint and token
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            request_timeout: None,
            malformed_lines: MalformedLinePolicy::default(),
            skip_header: false,
        }
    }

    /// Load a configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults; the result is not validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build the effective configuration from every layer
    ///
    /// Defaults, then the TOML file at `path` (if any), then the variables
    /// returned by `lookup`, then `cli`. The result is not validated.
    pub fn load<F>(path: Option<&Path>, lookup: F, cli: &CliOverrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::new(String::new(), String::new()),
        };
        config.apply_overrides_from(lookup)?;
        cli.apply_to(&mut config);
        Ok(config)
    }

    /// Overlay values from an arbitrary key lookup
    ///
    /// `lookup` receives the environment variable names defined in this
    /// module and returns `None` for unset keys.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }

        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = token;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::config(
                    "request_timeout",
                    format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"),
                )
            })?;
            self.request_timeout = Some(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup(ENV_MALFORMED_LINES) {
            self.malformed_lines = raw
                .parse()
                .map_err(|e: String| Error::config("malformed_lines", e))?;
        }

        if let Some(raw) = lookup(ENV_SKIP_HEADER) {
            self.skip_header = parse_bool(&raw)
                .ok_or_else(|| Error::config("skip_header", format!("invalid boolean '{raw}'")))?;
        }

        Ok(())
    }

    /// Check that the configuration can be used for a sync run
    ///
    /// The endpoint must be an absolute http(s) URL, the token must be
    /// non-empty and usable as a header value, and a configured timeout
    /// must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::config("endpoint", "endpoint is not set"));
        }

        let url = url::Url::parse(&self.endpoint).map_err(|e| {
            Error::config("endpoint", format!("invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(
                "endpoint",
                format!("endpoint must use http or https, got '{}'", url.scheme()),
            ));
        }

        if self.token.trim().is_empty() {
            return Err(Error::config("token", "access token is not set"));
        }
        if reqwest::header::HeaderValue::from_str(&self.token).is_err() {
            return Err(Error::config(
                "token",
                "access token contains characters not allowed in an HTTP header",
            ));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(Error::config(
                "request_timeout",
                "request timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}

/// Settings given on the command line, applied after file and environment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Replacement endpoint URL
    pub endpoint: Option<String>,
    /// Force [`MalformedLinePolicy::Fail`]
    pub fail_on_malformed: bool,
}

impl CliOverrides {
    /// Overwrite the fields of `config` that were given on the command line
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if self.fail_on_malformed {
            config.malformed_lines = MalformedLinePolicy::Fail;
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
