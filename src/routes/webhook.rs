//! Telegram webhook endpoint
//!
//! Receives updates, rejects malformed ones with 400 and dispatches the
//! rest. Dispatch failures are reported to the admin chat and the update is
//! still acknowledged, so Telegram does not redeliver it.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    dispatch::InboundEvent,
    error::{AppError, AppResult},
    routes::metrics::record_webhook_event,
    AppState,
};

/// Admin notice for an update without chat id or text
pub const INVALID_EVENT_NOTICE: &str = "Received invalid data in webhook";

/// Webhook acknowledgement body
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
}

/// Handle a Telegram update
pub async fn webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<WebhookResponse>> {
    let event = match parse_event(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "Rejecting malformed webhook update");
            record_webhook_event("invalid");
            state.notifier.notify(INVALID_EVENT_NOTICE).await;
            return Err(e);
        }
    };

    match state.dispatcher.dispatch(&event).await {
        Ok(outcome) => debug!(?outcome, "Webhook update handled"),
        Err(e) => {
            error!(error = %e, "Failed to process webhook update");
            state
                .notifier
                .notify(&format!("Error processing message: {}", e))
                .await;
        }
    }

    Ok(Json(WebhookResponse { success: true }))
}

fn parse_event(body: &[u8]) -> AppResult<InboundEvent> {
    let update: Value = serde_json::from_slice(body).map_err(AppError::from)?;
    InboundEvent::from_update(&update)
}
