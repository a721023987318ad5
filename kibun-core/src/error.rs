//! Core error types

use thiserror::Error;

/// Errors originating in the core scoring algorithm.
///
/// Scoring itself never fails: empty or unknown text produces a valid
/// neutral result. The only failure mode is loading the lexicon data,
/// without which the analyzer cannot operate.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Lexicon data could not be parsed
    #[error("lexicon load failed: {0}")]
    LexiconLoad(String),

    /// Lexicon data parsed but failed validation
    #[error("invalid lexicon: {0}")]
    LexiconInvalid(String),

    /// Unknown lexicon code requested
    #[error("unknown lexicon code: {code}")]
    UnknownLexicon {
        /// The lexicon code that has no embedded data
        code: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
