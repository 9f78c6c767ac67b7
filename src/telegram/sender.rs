//! Message sender abstraction
//!
//! The dispatcher and the response fetcher only need "deliver this text to
//! that chat". Keeping it behind a trait lets tests substitute a recorder.

use async_trait::async_trait;

use crate::{error::AppResult, telegram::models::DeliveryResult};

/// Delivers text messages to a chat destination
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `text` to `chat_id`, returning the platform's response body.
    ///
    /// No retry is attempted; transport failures are returned as errors.
    async fn send(&self, chat_id: &str, text: &str) -> AppResult<DeliveryResult>;
}
