//! Common test utilities for smite-proxy tests

use std::sync::Arc;

use serde_json::Value;
use smite_proxy::{Credentials, SmiteApi};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEV_ID: &str = "1004";
pub const AUTH_KEY: &str = "23DF3C7E9BD14D84BF892AD206B6755C";

/// Setup a mock upstream API for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock upstream
pub fn test_api(server: &MockServer) -> SmiteApi {
    SmiteApi::with_base_url(Credentials::new(DEV_ID, AUTH_KEY), &server.uri())
        .expect("client should build")
}

#[allow(dead_code)]
pub fn shared_api(server: &MockServer) -> Arc<SmiteApi> {
    Arc::new(test_api(server))
}

/// Path pattern of a signed request without a session segment.
pub fn signed_path(method_name: &str, id: Option<&str>) -> String {
    let mut pattern = format!(r"^/{}Json/{}/[0-9a-f]{{32}}/\d{{14}}", method_name, DEV_ID);
    if let Some(id) = id {
        pattern.push('/');
        pattern.push_str(id);
    }
    pattern.push('$');
    pattern
}

/// Path pattern of a signed request carrying `session`.
#[allow(dead_code)]
pub fn signed_session_path(method_name: &str, session: &str, id: Option<&str>) -> String {
    let mut pattern = format!(
        r"^/{}Json/{}/[0-9a-f]{{32}}/{}/\d{{14}}",
        method_name, DEV_ID, session
    );
    if let Some(id) = id {
        pattern.push('/');
        pattern.push_str(id);
    }
    pattern.push('$');
    pattern
}

/// Mount a JSON answer for `path_pattern`, expected to be hit `times` times.
pub async fn mount_json(server: &MockServer, path_pattern: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path_regex(path_pattern))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}
