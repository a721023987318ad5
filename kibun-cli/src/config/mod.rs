//! Configuration module

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Remote provider configuration
    #[serde(default)]
    pub remote: RemoteProviderConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Default provider ("local" or "huggingface")
    pub default_provider: String,

    /// Lexicon code for the local provider
    pub lexicon: String,

    /// History file path (empty = no history)
    pub history_file: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_provider: "local".to_string(),
            lexicon: "en".to_string(),
            history_file: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Remote provider configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoteProviderConfig {
    /// Inference endpoint URL (empty = built-in default)
    pub endpoint: Option<String>,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key_env: "HUGGINGFACE_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}
