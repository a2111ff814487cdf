//! Roster download.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use super::{ACCESS_TOKEN_HEADER, StudentClient};
use crate::error::FetchError;
use crate::roster::{ParseOptions, parse_students};
use crate::types::StudentRecord;

impl StudentClient {
    /// Fetch the roster and return it sorted by first name
    ///
    /// Sends one GET with the access token and a JSON content type. Only a
    /// 200 response is parsed; any other status is returned as
    /// [`FetchError::HttpStatus`] without reading the body.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use student_sync::{Config, StudentClient};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = StudentClient::new(Config::new("https://roster.example.com/data", "token"))?;
    /// let students = client.fetch_students().await?;
    /// println!("fetched {} students", students.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_students(&self) -> Result<Vec<StudentRecord>, FetchError> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.config.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkFailure(format!("failed to read response body: {e}")))?;

        tracing::debug!(bytes = body.len(), "roster body received");

        parse_students(&body, ParseOptions::from(&self.config))
    }
}
