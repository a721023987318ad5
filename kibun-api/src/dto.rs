//! Data Transfer Objects for API

use kibun_core::normalize::round3;
use kibun_core::{SentimentLabel, SentimentResult};
use kibun_engine::Analysis;

/// Sentiment proportions rounded to presentation precision
///
/// The internal result keeps full precision; these fields carry the
/// three-decimal form used for display and serialization. `compound`
/// retains full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    /// Positive proportion (3 decimals)
    pub positive: f64,
    /// Negative proportion (3 decimals)
    pub negative: f64,
    /// Neutral proportion (3 decimals)
    pub neutral: f64,
    /// Normalized compound polarity in [-1.0, 1.0]
    pub compound: f64,
}

impl From<SentimentResult> for Scores {
    fn from(result: SentimentResult) -> Self {
        Self {
            positive: round3(result.positive),
            negative: round3(result.negative),
            neutral: round3(result.neutral),
            compound: result.compound,
        }
    }
}

/// Complete analysis report
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// The analyzed text
    pub text: String,
    /// Rounded proportion scores plus compound
    pub scores: Scores,
    /// Derived three-way label
    pub label: SentimentLabel,
    /// Confidence shorthand: absolute compound score
    pub confidence: f64,
    /// Provider that produced the result
    pub provider: String,
    /// Wall-clock analysis time in milliseconds
    pub elapsed_ms: f64,
}

impl Report {
    /// Build a report from an engine analysis
    pub fn from_analysis(text: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            text: text.into(),
            scores: analysis.result.into(),
            label: analysis.result.label,
            confidence: analysis.result.compound.abs(),
            provider: analysis.provider.to_string(),
            elapsed_ms: analysis.elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_round_to_three_decimals() {
        let result = SentimentResult {
            positive: 0.123456,
            negative: 0.234567,
            neutral: 0.641977,
            compound: 0.4019,
            label: SentimentLabel::Positive,
        };
        let scores = Scores::from(result);
        assert_eq!(scores.positive, 0.123);
        assert_eq!(scores.negative, 0.235);
        assert_eq!(scores.neutral, 0.642);
        // Compound keeps full precision.
        assert_eq!(scores.compound, 0.4019);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serializes_with_lowercase_label() {
        let analysis = Analysis {
            result: SentimentResult::neutral(),
            provider: "local",
            elapsed_ms: 0.1,
        };
        let report = Report::from_analysis("hm", analysis);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"label\":\"neutral\""));
        assert!(json.contains("\"provider\":\"local\""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_round_trips_through_json() {
        let analysis = Analysis {
            result: SentimentResult::neutral(),
            provider: "local",
            elapsed_ms: 2.0,
        };
        let report = Report::from_analysis("steady", analysis);
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
