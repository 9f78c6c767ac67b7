//! Common test utilities for Askbot
//!
//! Shared fixtures and a harness that runs the real router against mock
//! upstreams.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::{json, Value};

use askbot::{routes, AppState, Config};

use crate::mocks::{MockCompletion, MockTelegram};

/// Test configuration constants
pub mod constants {
    /// Bot token embedded in the sendMessage path
    pub const TEST_BOT_TOKEN: &str = "123456:test-token";
    /// Value expected in the `api-key` header
    pub const TEST_API_KEY: &str = "test-openai-api-key";
    /// Admin destination for error notifications
    pub const ADMIN_CHAT_ID: &str = "999";
    /// Chat the test updates come from
    pub const USER_CHAT_ID: i64 = 4242;
    /// Backoff factor used in tests instead of one second
    pub const TEST_BACKOFF_MS: u64 = 50;
}

/// Config pointing at the given mock upstreams
pub fn test_config(telegram_url: &str, completion_endpoint: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        telegram_api_url: telegram_url.to_string(),
        telegram_api_token: constants::TEST_BOT_TOKEN.to_string(),
        admin_chat_id: constants::ADMIN_CHAT_ID.to_string(),
        openai_endpoint: completion_endpoint.to_string(),
        openai_api_key: constants::TEST_API_KEY.to_string(),
        retry_max_attempts: 3,
        retry_backoff: Duration::from_millis(constants::TEST_BACKOFF_MS),
        http_timeout: Duration::from_secs(5),
    }
}

/// A Telegram update carrying `text` from `chat_id`
pub fn update(chat_id: i64, text: &str) -> Value {
    json!({
        "update_id": 10001,
        "message": {
            "message_id": 1,
            "date": 1706745600,
            "chat": { "id": chat_id, "type": "private" },
            "from": { "id": chat_id, "is_bot": false, "first_name": "Test" },
            "text": text
        }
    })
}

/// Real router wired to mock Telegram and completions servers
pub struct TestHarness {
    pub server: TestServer,
    pub telegram: MockTelegram,
    pub completion: MockCompletion,
}

impl TestHarness {
    /// Start both mocks and build the app through `AppState::new`
    ///
    /// No mocks are mounted; each test sets up the responses it needs.
    pub async fn new() -> Self {
        let telegram = MockTelegram::start().await;
        let completion = MockCompletion::start().await;

        let config = test_config(&telegram.uri(), &completion.endpoint());
        let state = Arc::new(AppState::new(&config).expect("Failed to build app state"));
        let app = routes::create_router(state);

        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            telegram,
            completion,
        }
    }

    /// Same as [`TestHarness::new`] with Telegram accepting every message
    pub async fn with_telegram() -> Self {
        let harness = Self::new().await;
        harness.telegram.mock_send_message_success().await;
        harness
    }

    /// Messages the user chat received
    pub async fn user_messages(&self) -> Vec<String> {
        self.telegram
            .messages_to(&constants::USER_CHAT_ID.to_string())
            .await
    }

    /// Messages the admin chat received
    pub async fn admin_messages(&self) -> Vec<String> {
        self.telegram.messages_to(constants::ADMIN_CHAT_ID).await
    }
}
