//! Engine configuration types

use std::time::Duration;

/// Retry policy for remote provider calls
///
/// Exponential backoff: attempt `n` (zero-based) sleeps
/// `base_delay * 2^n` before retrying. Only transient failures are
/// retried, and only up to `max_attempts` total tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (minimum 1)
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay before the retry following `attempt` (zero-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Remote provider endpoint configuration
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Inference endpoint URL
    pub endpoint: String,
    /// Bearer token, if the endpoint requires one
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co/models/\
                       distilbert-base-uncased-finetuned-sst-2-english"
                .to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Lexicon code for the local provider
    pub lexicon: Option<String>,
    /// Remote provider endpoint settings
    pub remote: RemoteConfig,
    /// Retry policy for remote calls
    pub retry: RetryPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_bounded_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        let policy = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
        };
        assert_eq!(policy.delay_for(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for(2), Duration::from_millis(400));
    }
}
