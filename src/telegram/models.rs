//! Telegram Bot API data models

use serde::Serialize;

/// Pass-through of the `sendMessage` response body
pub type DeliveryResult = serde_json::Value;

/// Form fields for `sendMessage`
#[derive(Debug, Serialize)]
pub struct SendMessageForm<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Whether a `sendMessage` response reports success
pub fn delivery_ok(result: &DeliveryResult) -> bool {
    result.get("ok").and_then(|v| v.as_bool()).unwrap_or(false)
}
