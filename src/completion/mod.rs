//! Generative-text completion module
//!
//! Sends `/ask` queries to the chat completions endpoint with input
//! trimming, rate-limit backoff and transient-failure retry.

pub mod client;
pub mod fetcher;
pub mod models;
pub mod retry;
pub mod tokens;

pub use client::CompletionClient;
pub use fetcher::ResponseFetcher;
pub use retry::RetryPolicy;
