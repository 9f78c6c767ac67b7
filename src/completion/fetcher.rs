//! Response fetcher abstraction
//!
//! The dispatcher depends on this trait rather than on the HTTP client so
//! command routing can be tested without an upstream.

use async_trait::async_trait;

/// Turns a user query into reply text
///
/// Implementations never fail outright: upstream failures are converted
/// into a degraded reply string so the requester always gets an answer.
#[async_trait]
pub trait ResponseFetcher: Send + Sync {
    /// Get the reply text for `query`
    async fn fetch(&self, query: &str) -> String;
}
