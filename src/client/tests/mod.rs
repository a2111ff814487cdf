use super::*;
use crate::compression::gzip_decompress;
use crate::config::MalformedLinePolicy;
use crate::error::{FetchError, UploadError};
use crate::types::StudentRecord;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};


const TOKEN: &str = "test-token";
const ROSTER_PATH: &str = "/interviewer/data";

/// Helper to create a client pointed at the mock server's roster path.
fn client_for(server: &MockServer) -> StudentClient {
    StudentClient::new(Config::new(format!("{}{}", server.uri(), ROSTER_PATH), TOKEN)).unwrap()
}

/// Endpoint on a port nothing is listening on.
fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{ROSTER_PATH}")
}

fn student(id: &str, first_name: &str) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        email: format!("{}@x.com", first_name.to_lowercase()),
        ip_address: "10.0.0.1".to_string(),
    }
}

#[test]
fn new_rejects_invalid_config() {
    let result = StudentClient::new(Config::new("https://roster.example.com/data", ""));
    assert!(matches!(result, Err(crate::Error::Config { .. })));
}

#[test]
fn new_keeps_config() {
    let mut config = Config::new("https://roster.example.com/data", TOKEN);
    config.request_timeout = Some(Duration::from_secs(5));

    let client = StudentClient::new(config).unwrap();
    assert_eq!(client.endpoint(), "https://roster.example.com/data");
    assert_eq!(client.config().request_timeout, Some(Duration::from_secs(5)));
}
