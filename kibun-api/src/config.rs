//! High-level configuration API

use std::path::PathBuf;
use std::time::Duration;

use kibun_engine::{EngineConfig, ProviderKind, RetryPolicy};

use crate::error::{ApiError, Result};

/// High-level configuration for sentiment analysis
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) engine: EngineConfig,
    pub(crate) default_provider: ProviderKind,
    pub(crate) history_path: Option<PathBuf>,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The provider used when the caller does not name one
    pub fn default_provider(&self) -> ProviderKind {
        self.default_provider
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the lexicon code for the local provider
    pub fn lexicon(mut self, code: impl Into<String>) -> Self {
        self.config.engine.lexicon = Some(code.into());
        self
    }

    /// Select the default provider by name
    pub fn provider(mut self, name: &str) -> Result<Self> {
        self.config.default_provider =
            ProviderKind::parse(name).map_err(kibun_engine::EngineError::from)?;
        Ok(self)
    }

    /// Set the remote inference endpoint
    pub fn remote_endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.engine.remote.endpoint = url.into();
        self
    }

    /// Set the remote API key
    pub fn remote_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.engine.remote.api_key = Some(key.into());
        self
    }

    /// Set the remote request timeout
    pub fn remote_timeout(mut self, timeout: Duration) -> Self {
        self.config.engine.remote.timeout = timeout;
        self
    }

    /// Override the retry policy for remote calls
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.config.engine.retry = policy;
        self
    }

    /// Record analysis history to a JSON-lines file
    pub fn history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.history_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.engine.remote.endpoint.is_empty() {
            return Err(ApiError::Config(
                "remote endpoint must not be empty".to_string(),
            ));
        }
        if self.config.engine.retry.max_attempts == 0 {
            return Err(ApiError::Config(
                "retry policy needs at least one attempt".to_string(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.default_provider(), ProviderKind::Local);
    }

    #[test]
    fn provider_selection_by_name() {
        let config = Config::builder()
            .provider("huggingface")
            .unwrap()
            .remote_api_key("secret")
            .build()
            .unwrap();
        assert_eq!(config.default_provider(), ProviderKind::HuggingFace);
    }

    #[test]
    fn unknown_provider_name_fails_at_build_time() {
        assert!(Config::builder().provider("watson").is_err());
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let err = Config::builder().remote_endpoint("").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn zero_attempt_retry_is_rejected() {
        let policy = RetryPolicy {
            max_attempts: 0,
            base_delay: Duration::from_millis(1),
        };
        let err = Config::builder().retry(policy).build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
