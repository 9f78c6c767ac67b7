//! Askbot - Telegram webhook relay for a generative-text API
//!
//! Receives Telegram updates, answers `/ask` commands through a chat
//! completions endpoint and relays the reply back to the chat.

pub mod completion;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod routes;
pub mod telegram;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::completion::{CompletionClient, ResponseFetcher, RetryPolicy};
pub use crate::config::Config;
pub use crate::dispatch::Dispatcher;
pub use crate::telegram::{AdminNotifier, MessageSender, TelegramClient};

/// Application state shared across all request handlers
pub struct AppState {
    pub start_time: Instant,
    /// Routes commands to the fetcher and sends replies
    pub dispatcher: Arc<Dispatcher>,
    /// Reports malformed updates and dispatch failures
    pub notifier: AdminNotifier,
}

impl AppState {
    /// Create a new application state wired to the real upstreams
    pub fn new(config: &Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(16)
            .timeout(config.http_timeout)
            .build()?;

        let sender: Arc<dyn MessageSender> =
            Arc::new(TelegramClient::new(http_client.clone(), config));

        let notifier = AdminNotifier::new(sender.clone(), config.admin_chat_id.clone());
        let fetcher: Arc<dyn ResponseFetcher> = Arc::new(CompletionClient::new(
            http_client,
            config,
            notifier,
        )?);

        Ok(Self::from_parts(config, sender, fetcher))
    }

    /// Create an application state from already-built components
    pub fn from_parts(
        config: &Config,
        sender: Arc<dyn MessageSender>,
        fetcher: Arc<dyn ResponseFetcher>,
    ) -> Self {
        let notifier = AdminNotifier::new(sender.clone(), config.admin_chat_id.clone());
        let dispatcher = Arc::new(Dispatcher::new(sender, fetcher));

        Self {
            start_time: Instant::now(),
            dispatcher,
            notifier,
        }
    }
}
