//! Provider orchestration for kibun sentiment analysis
//!
//! This crate wires the pure lexicon scorer from `kibun-core` into a
//! routable engine: provider selection (local vs remote), bounded
//! retry with exponential backoff for the remote path, and the
//! history-sink collaborator seam.

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod provider;
pub mod retry;

// Re-export key types
pub use config::{EngineConfig, RemoteConfig, RetryPolicy};
pub use engine::{Analysis, AnalysisEngine, UserRef};
pub use error::{EngineError, ProviderError, Result};
pub use history::{AnalysisRecord, HistorySink, JsonlHistory, MemoryHistory};
pub use provider::{LocalProvider, Provider, ProviderKind, RemoteProvider};

// Re-export from core for convenience
pub use kibun_core::{SentimentIntensityAnalyzer, SentimentLabel, SentimentResult};
