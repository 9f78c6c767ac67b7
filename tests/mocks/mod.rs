//! Mock infrastructure for external services
//!
//! - Telegram Bot API (`sendMessage`)
//! - Chat completions endpoint

pub mod completion;
pub mod telegram;

pub use completion::*;
pub use telegram::*;
