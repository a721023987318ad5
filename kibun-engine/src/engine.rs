//! Analysis orchestration
//!
//! Routes a request through the selected provider, retries transient
//! remote failures, and emits a history record for the collaborator
//! sink. Authentication happens upstream: the engine only receives an
//! already-verified user reference.

use std::sync::Arc;
use std::time::Instant;

use kibun_core::{SentimentIntensityAnalyzer, SentimentResult};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::history::{AnalysisRecord, HistorySink};
use crate::provider::{LocalProvider, Provider, ProviderKind, RemoteProvider};
use crate::retry;

/// Verified user identity supplied by the caller
///
/// Opaque to the engine; it is only carried into history records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef(String);

impl UserRef {
    /// Wrap an already-verified user identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity for unauthenticated callers (CLI, tests)
    pub fn anonymous() -> Self {
        Self("anonymous".to_string())
    }

    /// The wrapped identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One completed analysis with routing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The sentiment result
    pub result: SentimentResult,
    /// Name of the provider that produced it
    pub provider: &'static str,
    /// Wall-clock time spent, in milliseconds
    pub elapsed_ms: f64,
}

/// Provider-routing analysis engine
pub struct AnalysisEngine {
    local: LocalProvider,
    remote: RemoteProvider,
    config: EngineConfig,
    history: Option<Arc<dyn HistorySink>>,
}

impl AnalysisEngine {
    /// Create an engine with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine from explicit configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let analyzer = match config.lexicon.as_deref() {
            Some(code) => SentimentIntensityAnalyzer::for_lexicon(code)?,
            None => SentimentIntensityAnalyzer::new()?,
        };
        let remote = RemoteProvider::new(config.remote.clone())?;

        Ok(Self {
            local: LocalProvider::new(analyzer),
            remote,
            config,
            history: None,
        })
    }

    /// Attach a history sink
    pub fn with_history(mut self, sink: Arc<dyn HistorySink>) -> Self {
        self.history = Some(sink);
        self
    }

    /// Analyze with an explicitly selected provider
    pub fn analyze(
        &self,
        user: &UserRef,
        text: &str,
        provider: ProviderKind,
    ) -> Result<Analysis> {
        let start = Instant::now();

        let (name, result) = match provider {
            ProviderKind::Local => (self.local.name(), self.local.analyze(text)?),
            ProviderKind::HuggingFace => {
                let result = retry::with_backoff(&self.config.retry, || {
                    self.remote.analyze(text)
                })?;
                (self.remote.name(), result)
            }
        };

        self.emit_history(user, text, name, &result);

        Ok(Analysis {
            result,
            provider: name,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }

    /// Analyze, resolving an optional caller-supplied provider name
    ///
    /// `None` selects the local lexicon path; an unknown name is an
    /// error rather than a fallback.
    pub fn analyze_named(
        &self,
        user: &UserRef,
        text: &str,
        provider: Option<&str>,
    ) -> Result<Analysis> {
        let kind = match provider {
            Some(name) => ProviderKind::parse(name)?,
            None => ProviderKind::Local,
        };
        self.analyze(user, text, kind)
    }

    /// Record the (text, score, label, user) tuple with the sink
    ///
    /// History is advisory: a failing sink is logged and the analysis
    /// still succeeds.
    fn emit_history(&self, user: &UserRef, text: &str, provider: &str, result: &SentimentResult) {
        let Some(sink) = &self.history else {
            return;
        };
        let record = AnalysisRecord::new(
            text,
            result.compound,
            result.label,
            user.as_str(),
            provider,
        );
        if let Err(e) = sink.record(&record) {
            log::error!("failed to record analysis history: {e}");
        }
    }
}
