//! Assertions over requests captured by the mock endpoint

use student_sync::StudentRecord;
use student_sync::compression::gzip_decompress;
use wiremock::MockServer;

/// Decode every PUT body the server received into student lists
pub async fn uploaded_rosters(server: &MockServer) -> Vec<Vec<StudentRecord>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == "PUT")
        .map(|request| {
            let json = gzip_decompress(&request.body).expect("PUT body is not gzip");
            serde_json::from_slice(&json).expect("PUT body is not a student array")
        })
        .collect()
}

/// Count requests with the given HTTP method
pub async fn count_requests(server: &MockServer, http_method: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == http_method)
        .count()
}

/// First names in list order
pub fn first_names(students: &[StudentRecord]) -> Vec<&str> {
    students.iter().map(|s| s.first_name.as_str()).collect()
}
