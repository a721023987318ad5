//! Score normalization and labeling
//!
//! Converts raw valence sums into a bounded compound score and the
//! three-way sentiment label.

use serde::{Deserialize, Serialize};

use crate::scorer::ScoreAccumulator;

/// Smoothing constant of the compound normalization
///
/// `compound = raw / sqrt(raw^2 + ALPHA)` squashes unbounded sums into
/// (-1, 1) asymptotically without a hard clip, preserving monotonicity.
pub const ALPHA: f64 = 15.0;

/// Compound score at or above which text is labeled positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below which text is labeled negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Compound score >= +0.05
    Positive,
    /// Compound score <= -0.05
    Negative,
    /// Compound score strictly between the thresholds
    Neutral,
}

impl SentimentLabel {
    /// Derive the label from a compound score using the fixed thresholds
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Lowercase string form ("positive" / "negative" / "neutral")
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final, immutable result of one analysis call
///
/// The three proportions sum to 1.0 (within floating tolerance) and
/// `compound` lies in [-1.0, 1.0]. Proportions are kept at full
/// precision here; rounding to presentation precision happens at the
/// serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Positive proportion of the scored mass
    pub positive: f64,
    /// Negative proportion of the scored mass
    pub negative: f64,
    /// Neutral proportion of the scored mass
    pub neutral: f64,
    /// Normalized compound polarity in [-1.0, 1.0]
    pub compound: f64,
    /// Label derived from `compound`
    pub label: SentimentLabel,
}

impl SentimentResult {
    /// The defined result for input with no scored mass at all
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
            label: SentimentLabel::Neutral,
        }
    }
}

/// Convert raw sums into a bounded, labeled result
pub fn normalize(acc: &ScoreAccumulator) -> SentimentResult {
    let positive_mass = acc.positive_sum;
    let negative_mass = acc.negative_sum.abs();
    let total = positive_mass + negative_mass + acc.neutral_count as f64;

    // Division-by-zero guard: nothing scored and nothing neutral.
    if total == 0.0 {
        return SentimentResult::neutral();
    }

    let raw = acc.positive_sum + acc.negative_sum;
    let compound = (raw / (raw * raw + ALPHA).sqrt()).clamp(-1.0, 1.0);

    SentimentResult {
        positive: positive_mass / total,
        negative: negative_mass / total,
        neutral: acc.neutral_count as f64 / total,
        compound,
        label: SentimentLabel::from_compound(compound),
    }
}

/// Round a proportion to presentation precision (3 decimal digits)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
