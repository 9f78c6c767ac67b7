//! Webhook command dispatch
//!
//! Classifies an inbound event and sends the matching reply. Dispatch keeps
//! no state between calls.

pub mod command;
pub mod event;

pub use command::Command;
pub use event::InboundEvent;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{
    completion::ResponseFetcher,
    error::AppError,
    routes::metrics::record_webhook_event,
    telegram::MessageSender,
};

/// Reply to `/ask` without a query
pub const ASK_USAGE: &str = "Please provide a query after the /ask command.";

/// Reply to `/start`
pub const LIVENESS_REPLY: &str = "I am working";

/// What a dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// An `/ask` query was answered
    Answered,
    /// `/ask` arrived without a query
    PromptedForQuery,
    /// `/start` was acknowledged
    Acknowledged,
    /// The text was not a command; nothing was sent
    Ignored,
}

/// Failure while handling a classified command
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to deliver reply to chat {chat_id}: {source}")]
    Delivery {
        chat_id: String,
        #[source]
        source: AppError,
    },
}

/// Routes commands to the response fetcher and sends replies
pub struct Dispatcher {
    sender: Arc<dyn MessageSender>,
    fetcher: Arc<dyn ResponseFetcher>,
}

impl Dispatcher {
    pub fn new(sender: Arc<dyn MessageSender>, fetcher: Arc<dyn ResponseFetcher>) -> Self {
        Self { sender, fetcher }
    }

    /// Handle one inbound event
    ///
    /// Replies always go to the event's own chat. Errors are returned to
    /// the caller, which decides whether to report them.
    #[instrument(skip(self, event), fields(chat_id = %event.chat_id))]
    pub async fn dispatch(&self, event: &InboundEvent) -> Result<DispatchOutcome, DispatchError> {
        let command = Command::parse(&event.text);
        record_webhook_event(command.label());
        debug!(command = command.label(), "Classified inbound message");

        match command {
            Command::Ask(query) if query.is_empty() => {
                self.reply(&event.chat_id, ASK_USAGE).await?;
                Ok(DispatchOutcome::PromptedForQuery)
            }
            Command::Ask(query) => {
                info!(query_len = query.len(), "Answering /ask query");
                let answer = self.fetcher.fetch(&query).await;
                self.reply(&event.chat_id, &answer).await?;
                Ok(DispatchOutcome::Answered)
            }
            Command::Start => {
                self.reply(&event.chat_id, LIVENESS_REPLY).await?;
                Ok(DispatchOutcome::Acknowledged)
            }
            Command::Unrecognized => Ok(DispatchOutcome::Ignored),
        }
    }

    async fn reply(&self, chat_id: &str, text: &str) -> Result<(), DispatchError> {
        self.sender
            .send(chat_id, text)
            .await
            .map(|_| ())
            .map_err(|source| DispatchError::Delivery {
                chat_id: chat_id.to_string(),
                source,
            })
    }
}
