//! Layered error types
//!
//! Provider errors are distinct kinds surfaced to the caller, never
//! masked as neutral results.

use kibun_core::CoreError;
use thiserror::Error;

/// Errors from a sentiment provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Caller asked for a provider name the engine does not know
    #[error("unsupported provider: {name}")]
    Unsupported {
        /// The provider name that was requested
        name: String,
    },

    /// Provider requires credentials that are not configured
    #[error("provider '{provider}' is not configured: {reason}")]
    NotConfigured {
        /// The provider that is missing configuration
        provider: &'static str,
        /// What is missing
        reason: String,
    },

    /// Network-level failure reaching the provider (transient)
    #[error("network error from '{provider}': {message}")]
    Network {
        /// The provider that failed
        provider: &'static str,
        /// Transport error description
        message: String,
    },

    /// Provider answered with a non-success HTTP status
    #[error("provider '{provider}' returned status {status}")]
    Status {
        /// The provider that failed
        provider: &'static str,
        /// The HTTP status code
        status: u16,
    },

    /// Provider answered 200 but the body did not match the expected shape
    #[error("provider '{provider}' response could not be decoded: {message}")]
    Decode {
        /// The provider whose response was malformed
        provider: &'static str,
        /// What was wrong with the body
        message: String,
    },

    /// Local lexicon failure
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ProviderError {
    /// Whether retrying the same call may succeed
    ///
    /// Network failures and server-side (5xx) statuses are transient;
    /// everything else is deterministic and retrying would only repeat
    /// the failure.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Network { .. } => true,
            ProviderError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Provider call failed after retries were exhausted
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Core algorithm error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// History sink I/O failure
    #[error("history sink error: {0}")]
    History(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
