//! Public API for kibun sentiment analysis
//!
//! This crate provides a clean, stable interface over the lexicon
//! scorer and provider engine, hiding internal implementation details.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::sync::Arc;

use kibun_engine::{AnalysisEngine, ProviderKind};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Report, Scores};
pub use error::{ApiError, Result};
pub use kibun_core::{SentimentLabel, SentimentResult};
pub use kibun_engine::{AnalysisRecord, JsonlHistory, RetryPolicy, UserRef};

/// Main entry point for sentiment analysis
///
/// Wraps the provider engine behind a stable surface. An `Analyzer`
/// is cheap to share: all state is read-only after construction.
pub struct Analyzer {
    engine: Arc<AnalysisEngine>,
    config: Config,
}

impl Analyzer {
    /// Create an analyzer with default configuration (local lexicon)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let mut engine = AnalysisEngine::with_config(config.engine.clone())?;
        if let Some(path) = &config.history_path {
            engine = engine.with_history(Arc::new(JsonlHistory::new(path)));
        }
        Ok(Self {
            engine: Arc::new(engine),
            config,
        })
    }

    /// The current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze text as the anonymous user with the default provider
    pub fn analyze(&self, text: &str) -> Result<Report> {
        self.analyze_as(&UserRef::anonymous(), text)
    }

    /// Analyze text on behalf of a verified user
    pub fn analyze_as(&self, user: &UserRef, text: &str) -> Result<Report> {
        let analysis = self
            .engine
            .analyze(user, text, self.config.default_provider)?;
        Ok(Report::from_analysis(text, analysis))
    }

    /// Analyze text with a caller-supplied provider name
    ///
    /// `None` uses the configured default; an unknown name is an
    /// error, not a fallback.
    pub fn analyze_with(
        &self,
        user: &UserRef,
        text: &str,
        provider: Option<&str>,
    ) -> Result<Report> {
        let analysis = match provider {
            Some(name) => {
                let kind = ProviderKind::parse(name).map_err(kibun_engine::EngineError::from)?;
                self.engine.analyze(user, text, kind)?
            }
            None => self
                .engine
                .analyze(user, text, self.config.default_provider)?,
        };
        Ok(Report::from_analysis(text, analysis))
    }
}

/// Analyze text with default configuration
///
/// Convenience for one-off calls; repeated callers should construct an
/// [`Analyzer`] once and reuse it.
pub fn analyze_text(text: &str) -> Result<Report> {
    Analyzer::new()?.analyze(text)
}
