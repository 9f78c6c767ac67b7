//! Configuration management for Askbot
//!
//! Configuration is loaded from environment variables once at startup.
//! Missing or blank required values fail startup instead of surfacing on
//! the first webhook call.

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Telegram Bot API base URL (without the `/bot<token>` suffix)
    pub telegram_api_url: String,
    /// Telegram bot token
    pub telegram_api_token: String,
    /// Chat that receives operational error notifications
    pub admin_chat_id: String,

    /// Full chat completions endpoint URL, used verbatim
    pub openai_endpoint: String,
    /// Value sent in the `api-key` header
    pub openai_api_key: String,

    /// Number of attempts the response fetcher makes per query
    pub retry_max_attempts: u32,
    /// Backoff factor; attempt `n` waits `factor * 2^n`
    pub retry_backoff: Duration,

    /// Timeout applied to every outbound HTTP request
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let retry_max_attempts: u32 = env::var("RETRY_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .context("Invalid RETRY_MAX_ATTEMPTS")?;
        if retry_max_attempts == 0 {
            bail!("RETRY_MAX_ATTEMPTS must be at least 1");
        }

        Ok(Self {
            host: env::var("ASKBOT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ASKBOT_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("Invalid ASKBOT_PORT")?,

            telegram_api_url: env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string())
                .trim_end_matches('/')
                .to_string(),
            telegram_api_token: required("TELEGRAM_API_TOKEN")?,
            admin_chat_id: required("CHAT_ID")?,

            openai_endpoint: required("OPENAI_ENDPOINT")?,
            openai_api_key: required("OPENAI_API_KEY")?,

            retry_max_attempts,
            retry_backoff: Duration::from_millis(
                env::var("RETRY_BACKOFF_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .context("Invalid RETRY_BACKOFF_MS")?,
            ),

            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .context("Invalid HTTP_TIMEOUT_SECONDS")?,
            ),
        })
    }
}

/// Read a variable that must be set to a non-blank value
fn required(name: &str) -> Result<String> {
    let value = env::var(name).with_context(|| format!("{} must be set", name))?;
    if value.trim().is_empty() {
        bail!("{} must not be empty", name);
    }
    Ok(value)
}
