//! Mock Telegram Bot API for testing
//!
//! Provides a wiremock-based mock of `POST /bot<token>/sendMessage` and
//! helpers to read back what the relay sent.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_BOT_TOKEN;

/// A message captured from a `sendMessage` form body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: String,
    pub text: String,
}

/// Mock Telegram server wrapper
pub struct MockTelegram {
    server: MockServer,
}

impl MockTelegram {
    /// Start a new mock Telegram server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI, used as the Bot API base URL
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    fn send_message_path() -> String {
        format!("/bot{}/sendMessage", TEST_BOT_TOKEN)
    }

    /// Accept every message
    pub async fn mock_send_message_success(&self) {
        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": { "message_id": 1 }
            })))
            .mount(&self.server)
            .await;
    }

    /// Fail every message with a non-JSON gateway error
    pub async fn mock_send_message_unavailable(&self) {
        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&self.server)
            .await;
    }

    /// All messages received, in order
    pub async fn sent_messages(&self) -> Vec<SentMessage> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == Self::send_message_path())
            .map(|r| {
                let mut chat_id = String::new();
                let mut text = String::new();
                for (key, value) in url::form_urlencoded::parse(&r.body) {
                    match key.as_ref() {
                        "chat_id" => chat_id = value.into_owned(),
                        "text" => text = value.into_owned(),
                        _ => {}
                    }
                }
                SentMessage { chat_id, text }
            })
            .collect()
    }

    /// Texts of the messages sent to `chat_id`, in order
    pub async fn messages_to(&self, chat_id: &str) -> Vec<String> {
        self.sent_messages()
            .await
            .into_iter()
            .filter(|m| m.chat_id == chat_id)
            .map(|m| m.text)
            .collect()
    }
}
