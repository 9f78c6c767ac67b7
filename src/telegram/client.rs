//! Telegram Bot API client
//!
//! HTTP client for the `sendMessage` method. The bot token is part of the
//! request path, so URLs built here are never logged.

use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use crate::{
    config::Config,
    error::AppResult,
    routes::metrics::record_message_sent,
    telegram::{
        models::{delivery_ok, DeliveryResult, SendMessageForm},
        sender::MessageSender,
    },
};

/// Telegram Bot API client
pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a new Telegram client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.telegram_api_url.clone(),
            token: config.telegram_api_token.clone(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    #[instrument(skip(self, text), fields(chat_id = %chat_id, text_len = text.len()))]
    async fn send(&self, chat_id: &str, text: &str) -> AppResult<DeliveryResult> {
        debug!("Sending Telegram message");

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .form(&SendMessageForm { chat_id, text })
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, "Failed to send request to Telegram");
                record_message_sent("error");
                e
            })?;

        let status = response.status();
        debug!(status = %status, "Telegram sendMessage response status");

        let result: DeliveryResult = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, "Failed to decode Telegram response");
            record_message_sent("error");
            e
        })?;

        if delivery_ok(&result) {
            record_message_sent("ok");
        } else {
            warn!(
                status = %status,
                description = ?result.get("description"),
                "Telegram rejected message"
            );
            record_message_sent("error");
        }

        Ok(result)
    }
}
