//! Inbound webhook events

use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Sender and text of an inbound Telegram update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub chat_id: String,
    pub text: String,
}

impl InboundEvent {
    /// Extract `message.chat.id` and `message.text` from an update body
    ///
    /// Both must be present and non-empty. A chat id of `0` counts as
    /// missing. Non-string text counts as missing, so such an update is
    /// rejected as malformed instead of being reported as a dispatch error.
    pub fn from_update(body: &Value) -> AppResult<Self> {
        let message = body.get("message");

        let chat_id = message
            .and_then(|m| m.get("chat"))
            .and_then(|c| c.get("id"))
            .and_then(chat_id_string);

        let text = message
            .and_then(|m| m.get("text"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty());

        match (chat_id, text) {
            (Some(chat_id), Some(text)) => Ok(Self {
                chat_id,
                text: text.to_string(),
            }),
            (None, _) => Err(AppError::BadRequest("missing message.chat.id".to_string())),
            (Some(_), None) => Err(AppError::BadRequest("missing message.text".to_string())),
        }
    }
}

/// Telegram sends numeric ids; string ids (channel usernames) are kept as is
fn chat_id_string(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
