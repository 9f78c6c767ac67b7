//! Chat completions client
//!
//! Posts `/ask` queries to the configured completions endpoint and retries
//! with exponential backoff. Terminal failures are reported to the admin
//! chat and turned into a degraded reply for the requester.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    completion::{
        fetcher::ResponseFetcher,
        models::{first_choice_content, CompletionRequest, NO_CONTENT},
        retry::RetryPolicy,
        tokens::{count_tokens, trim_to_budget, MAX_INPUT_TOKENS},
    },
    config::Config,
    error::{AppError, AppResult},
    routes::metrics::{record_completion_attempt, record_completion_duration},
    telegram::AdminNotifier,
};

/// Reply when every attempt was rate limited
pub const EXHAUSTED_MESSAGE: &str = "Failed to get a response after several attempts.";

/// Failure of a single attempt
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(reqwest::Error),

    #[error(transparent)]
    Status(reqwest::Error),

    #[error(transparent)]
    Decode(reqwest::Error),
}

impl FetchError {
    /// Error text with every underlying cause, outermost first
    pub fn detail(self) -> String {
        format!("{:#}", anyhow::Error::from(self))
    }
}

/// Result of an attempt that reached the endpoint
#[derive(Debug)]
enum Attempt {
    Answer(String),
    RateLimited,
}

/// Chat completions client
pub struct CompletionClient {
    client: reqwest::Client,
    endpoint: String,
    headers: HeaderMap,
    policy: RetryPolicy,
    notifier: AdminNotifier,
}

impl CompletionClient {
    /// Create a new completions client
    ///
    /// `notifier` receives the report of a terminal failure.
    pub fn new(
        client: reqwest::Client,
        config: &Config,
        notifier: AdminNotifier,
    ) -> AppResult<Self> {
        Ok(Self {
            client,
            endpoint: config.openai_endpoint.clone(),
            headers: api_key_headers(&config.openai_api_key)?,
            policy: RetryPolicy::from_config(config),
            notifier,
        })
    }

    /// Run the retry loop for one request
    async fn fetch_with_retry(&self, request: &CompletionRequest) -> String {
        for attempt in 0..self.policy.max_attempts {
            match self.attempt(request).await {
                Ok(Attempt::Answer(answer)) => {
                    record_completion_attempt("success");
                    debug!(attempt, answer_len = answer.len(), "Completion succeeded");
                    return answer;
                }
                Ok(Attempt::RateLimited) => {
                    record_completion_attempt("rate_limited");
                    if self.policy.is_last(attempt) {
                        break;
                    }
                    let wait = self.policy.delay_for(attempt);
                    warn!(
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        "Rate limit exceeded, backing off"
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(e) => {
                    record_completion_attempt("error");
                    let detail = e.detail();
                    if self.policy.is_last(attempt) {
                        error!(attempt, error = %detail, "Completion failed on final attempt");
                        let message = format!("Failed to make the request. Error: {}", detail);
                        self.notifier.notify(&message).await;
                        return message;
                    }
                    let wait = self.policy.delay_for(attempt);
                    warn!(
                        attempt,
                        error = %detail,
                        wait_ms = wait.as_millis() as u64,
                        "Completion request failed, retrying"
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }

        // Rate-limit exhaustion is not reported to the admin chat.
        warn!(attempts = self.policy.max_attempts, "All completion attempts were rate limited");
        EXHAUSTED_MESSAGE.to_string()
    }

    /// Make a single request
    async fn attempt(&self, request: &CompletionRequest) -> Result<Attempt, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        debug!(status = %status, "Completion response status");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(Attempt::RateLimited);
        }

        let response = response.error_for_status().map_err(FetchError::Status)?;
        let body: Value = response.json().await.map_err(FetchError::Decode)?;

        let answer = first_choice_content(&body).unwrap_or_else(|| {
            warn!(body = %body, "Completion response has no first-choice content");
            NO_CONTENT
        });

        Ok(Attempt::Answer(answer.to_string()))
    }
}

#[async_trait]
impl ResponseFetcher for CompletionClient {
    #[instrument(skip(self, query), fields(query_tokens = tracing::field::Empty))]
    async fn fetch(&self, query: &str) -> String {
        let started = Instant::now();

        let tokens = count_tokens(query);
        tracing::Span::current().record("query_tokens", tokens);
        if tokens > MAX_INPUT_TOKENS {
            info!(tokens, limit = MAX_INPUT_TOKENS, "Trimming query to input token budget");
        }

        let query = trim_to_budget(query, MAX_INPUT_TOKENS);
        let request = CompletionRequest::for_query(&query);
        let answer = self.fetch_with_retry(&request).await;

        record_completion_duration(started.elapsed().as_secs_f64());
        answer
    }
}

/// Build headers with API key authentication
fn api_key_headers(api_key: &str) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(api_key).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Invalid OPENAI_API_KEY header value: {}", e))
    })?;
    headers.insert("api-key", value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}
