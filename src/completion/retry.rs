//! Retry policy for the completion endpoint

use std::time::Duration;

use crate::config::Config;

/// Bounded exponential backoff
///
/// Attempts are zero-based; attempt `n` waits `backoff_factor * 2^n`
/// before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_factor: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_attempts: config.retry_max_attempts,
            backoff_factor: config.retry_backoff,
        }
    }

    /// Wait applied after a failed `attempt`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff_factor
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    pub fn is_last(&self, attempt: u32) -> bool {
        attempt + 1 >= self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_factor: Duration::from_secs(1),
        }
    }
}
