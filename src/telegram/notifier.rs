//! Admin chat notifications

use std::sync::Arc;

use tracing::{error, warn};

use crate::telegram::{models::delivery_ok, sender::MessageSender};

/// Sends operational error reports to the admin chat
///
/// Notifications are best effort: a failed delivery is logged and never
/// replaces the error being reported.
#[derive(Clone)]
pub struct AdminNotifier {
    sender: Arc<dyn MessageSender>,
    chat_id: String,
}

impl AdminNotifier {
    pub fn new(sender: Arc<dyn MessageSender>, chat_id: impl Into<String>) -> Self {
        Self {
            sender,
            chat_id: chat_id.into(),
        }
    }

    pub async fn notify(&self, text: &str) {
        match self.sender.send(&self.chat_id, text).await {
            Ok(result) if !delivery_ok(&result) => {
                warn!(chat_id = %self.chat_id, "Admin notification was rejected");
            }
            Ok(_) => {}
            Err(e) => {
                error!(chat_id = %self.chat_id, error = %e, "Failed to notify admin chat");
            }
        }
    }
}
