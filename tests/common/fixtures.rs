//! Roster fixtures and mock endpoint setup

use student_sync::{Config, StudentClient};
use wiremock::MockServer;

/// Path the mock roster endpoint is mounted at
pub const ROSTER_PATH: &str = "/interviewer/data";

/// Access token the mocks expect
pub const TOKEN: &str = "e2e-token";

/// Two students, already in first-name order
pub const SORTED_ROSTER: &str = "1,Ann,Lee,ann@x.com,1.1.1.1\n2,Bob,Roe,bob@x.com,2.2.2.2";

/// The same two students, served in reverse
pub const REVERSED_ROSTER: &str = "2,Bob,Roe,bob@x.com,2.2.2.2\n1,Ann,Lee,ann@x.com,1.1.1.1";

/// A larger roster with a duplicate first name and trailing newline
pub const MIXED_ROSTER: &str = "\
10,Mia,Kay,mia@x.com,10.0.0.10
4,Zoe,Fox,zoe@x.com,10.0.0.4
7,Ann,Orr,ann.orr@x.com,10.0.0.7
2,Liam,Day,liam@x.com,10.0.0.2
1,Ann,Lee,ann@x.com,10.0.0.1
";

/// Full endpoint URL for a mock server
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), ROSTER_PATH)
}

/// Client pointed at a mock server with default settings
pub fn client_for(server: &MockServer) -> StudentClient {
    StudentClient::new(Config::new(endpoint(server), TOKEN)).unwrap()
}
