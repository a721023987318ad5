//! Rules-based lexicon sentiment scoring
//!
//! This crate implements the core algorithm behind kibun: a static
//! word/intensifier lexicon, a whitespace-and-punctuation tokenizer,
//! heuristic contextual scoring (negation, boosters, emphasis), and a
//! bounded compound normalization. The whole pipeline is synchronous,
//! pure per call, and free of I/O.

#![warn(missing_docs)]

pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod scorer;
pub mod tokenizer;

use std::sync::Arc;

// Re-export key types
pub use error::{CoreError, Result};
pub use lexicon::{get_lexicon, Lexicon};
pub use normalize::{SentimentLabel, SentimentResult};
pub use scorer::{ScoreAccumulator, Scorer};
pub use tokenizer::{tokenize, Token};

/// Lexicon-backed sentiment analyzer
///
/// Entry point for local sentiment scoring. Construction loads (or
/// reuses) the shared lexicon; analysis is a pure function of the
/// input text, so a single instance can be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct SentimentIntensityAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl SentimentIntensityAnalyzer {
    /// Create an analyzer backed by the embedded English lexicon
    ///
    /// Fails only if the lexicon data cannot be loaded; there is no
    /// degraded mode without it.
    pub fn new() -> Result<Self> {
        Self::for_lexicon("en")
    }

    /// Create an analyzer for a specific lexicon code
    pub fn for_lexicon(code: &str) -> Result<Self> {
        Ok(Self {
            lexicon: get_lexicon(code)?,
        })
    }

    /// Create an analyzer over a caller-provided lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// The lexicon backing this analyzer
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Analyze text into a bounded, labeled sentiment result
    ///
    /// Empty or unscorable text yields a valid neutral result, never
    /// an error.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        let acc = Scorer::new(&self.lexicon).score(&tokens);
        normalize::normalize(&acc)
    }
}

/// Analyze text with the embedded English lexicon
///
/// Convenience for one-off calls; repeated callers should construct a
/// [`SentimentIntensityAnalyzer`] once and reuse it.
pub fn analyze_text(text: &str) -> Result<SentimentResult> {
    Ok(SentimentIntensityAnalyzer::new()?.analyze(text))
}
