//! Sentiment providers
//!
//! The local provider runs the lexicon algorithm in-process; the
//! remote provider proxies a HuggingFace-style inference endpoint.
//! Both produce the same [`SentimentResult`] shape so callers can
//! substitute one for the other.

use kibun_core::{SentimentIntensityAnalyzer, SentimentLabel, SentimentResult};

use crate::config::RemoteConfig;
use crate::error::ProviderError;

/// A source of sentiment results
pub trait Provider: Send + Sync {
    /// Stable provider name (used in history records and output)
    fn name(&self) -> &'static str;

    /// Analyze text, surfacing failures as distinct error kinds
    fn analyze(&self, text: &str) -> Result<SentimentResult, ProviderError>;
}

/// Known provider selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// In-process lexicon scorer
    #[default]
    Local,
    /// HuggingFace inference endpoint
    HuggingFace,
}

impl ProviderKind {
    /// Parse a caller-supplied provider name
    ///
    /// Unknown names are an error, not a silent fallback.
    pub fn parse(name: &str) -> Result<Self, ProviderError> {
        match name.to_ascii_lowercase().as_str() {
            "local" => Ok(ProviderKind::Local),
            "huggingface" => Ok(ProviderKind::HuggingFace),
            _ => Err(ProviderError::Unsupported {
                name: name.to_string(),
            }),
        }
    }

    /// Stable name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Local => "local",
            ProviderKind::HuggingFace => "huggingface",
        }
    }
}

/// In-process lexicon provider
pub struct LocalProvider {
    analyzer: SentimentIntensityAnalyzer,
}

impl LocalProvider {
    /// Create a provider over the given analyzer
    pub fn new(analyzer: SentimentIntensityAnalyzer) -> Self {
        Self { analyzer }
    }
}

impl Provider for LocalProvider {
    fn name(&self) -> &'static str {
        ProviderKind::Local.name()
    }

    fn analyze(&self, text: &str) -> Result<SentimentResult, ProviderError> {
        Ok(self.analyzer.analyze(text))
    }
}

/// HuggingFace-style remote provider
///
/// Posts `{"inputs": text}` to the configured endpoint and decodes the
/// `[{label, score}]` classification response into a
/// [`SentimentResult`]. A response that does not match that shape is a
/// [`ProviderError::Decode`], never a generic string.
pub struct RemoteProvider {
    config: RemoteConfig,
    client: reqwest::blocking::Client,
}

const PROVIDER_NAME: &str = "huggingface";

impl RemoteProvider {
    /// Create a provider for the configured endpoint
    pub fn new(config: RemoteConfig) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Network {
                provider: PROVIDER_NAME,
                message: e.to_string(),
            })?;
        Ok(Self { config, client })
    }
}

impl Provider for RemoteProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn analyze(&self, text: &str) -> Result<SentimentResult, ProviderError> {
        let api_key =
            self.config
                .api_key
                .as_deref()
                .ok_or_else(|| ProviderError::NotConfigured {
                    provider: PROVIDER_NAME,
                    reason: "API key not set".to_string(),
                })?;

        let body = serde_json::json!({
            "inputs": text,
            "options": { "wait_for_model": true },
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| ProviderError::Network {
                provider: PROVIDER_NAME,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
            });
        }

        let value: serde_json::Value =
            response.json().map_err(|e| ProviderError::Decode {
                provider: PROVIDER_NAME,
                message: e.to_string(),
            })?;

        decode_classification(&value)
    }
}

/// Decode a `[{label, score}]` classification body
///
/// The inference API wraps results in one or two array levels
/// depending on the model; both are accepted. The highest-scoring
/// class wins.
pub fn decode_classification(value: &serde_json::Value) -> Result<SentimentResult, ProviderError> {
    let decode_err = |message: String| ProviderError::Decode {
        provider: PROVIDER_NAME,
        message,
    };

    // Unwrap nesting until we reach an array of class objects.
    let mut classes = value;
    while let Some(first) = classes.as_array().and_then(|a| a.first()) {
        if first.is_array() {
            classes = first;
        } else {
            break;
        }
    }
    let classes = classes
        .as_array()
        .filter(|a| !a.is_empty())
        .ok_or_else(|| decode_err(format!("expected a non-empty array, got: {value}")))?;

    let mut best: Option<(&str, f64)> = None;
    for class in classes {
        let label = class
            .get("label")
            .and_then(|l| l.as_str())
            .ok_or_else(|| decode_err(format!("class entry missing 'label': {class}")))?;
        let score = class
            .get("score")
            .and_then(|s| s.as_f64())
            .ok_or_else(|| decode_err(format!("class entry missing 'score': {class}")))?;
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((label, score));
        }
    }

    let (label, score) =
        best.ok_or_else(|| decode_err("no scored classes in response".to_string()))?;
    let confidence = score.clamp(0.0, 1.0);

    let compound = match label.to_ascii_lowercase().as_str() {
        "positive" | "label_1" => confidence,
        "negative" | "label_0" => -confidence,
        "neutral" => 0.0,
        other => {
            return Err(decode_err(format!("unknown sentiment label '{other}'")));
        }
    };

    let (positive, negative) = if compound > 0.0 {
        (confidence, 0.0)
    } else if compound < 0.0 {
        (0.0, confidence)
    } else {
        (0.0, 0.0)
    };

    Ok(SentimentResult {
        positive,
        negative,
        neutral: 1.0 - positive - negative,
        compound,
        label: SentimentLabel::from_compound(compound),
    })
}
