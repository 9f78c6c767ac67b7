//! Mock chat completions endpoint for testing
//!
//! Mimics an Azure-OpenAI-style deployment URL. Responses can be queued so
//! retry sequences (429 then 200, 500 then 200) are easy to express.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_API_KEY;

const DEPLOYMENT_PATH: &str = "/openai/deployments/test/chat/completions";

/// Mock completions server wrapper
pub struct MockCompletion {
    server: MockServer,
}

impl MockCompletion {
    /// Start a new mock completions server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Full endpoint URL to configure the relay with
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), DEPLOYMENT_PATH)
    }

    fn matching() -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(DEPLOYMENT_PATH))
            .and(header("api-key", TEST_API_KEY))
    }

    /// Completion body with a single choice
    pub fn success_body(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "finish_reason": "stop",
                    "message": { "role": "assistant", "content": content }
                }
            ]
        })
    }

    /// Answer every request with `content`
    pub async fn mock_success(&self, content: &str) {
        Self::matching()
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::success_body(content)))
            .mount(&self.server)
            .await;
    }

    /// Answer the next `times` requests with `status`
    ///
    /// Mount this before a catch-all mock; the first mounted mock wins
    /// until it is used up.
    pub async fn mock_status_times(&self, status: u16, times: u64) {
        Self::matching()
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": { "code": status.to_string(), "message": "mock failure" }
            })))
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    /// Answer every request with `status`
    pub async fn mock_status(&self, status: u16) {
        Self::matching()
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of all received requests
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body should be JSON"))
            .collect()
    }

    /// The user query text of every received request
    pub async fn user_queries(&self) -> Vec<String> {
        self.request_bodies()
            .await
            .iter()
            .map(|body| {
                body["messages"][1]["content"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }
}
