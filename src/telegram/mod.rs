//! Telegram Bot API integration module
//!
//! Provides the message sender used for replies and admin notifications.

pub mod client;
pub mod models;
pub mod notifier;
pub mod sender;

pub use client::TelegramClient;
pub use models::*;
pub use notifier::AdminNotifier;
pub use sender::MessageSender;
