//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error (provider, retry, or history failure)
    #[error("engine error: {0}")]
    Engine(#[from] kibun_engine::EngineError),

    /// Core algorithm error (lexicon load)
    #[error("core error: {0}")]
    Core(#[from] kibun_core::CoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
