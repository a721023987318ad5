//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Analysis error from the engine
    AnalysisError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::AnalysisError(msg) => write!(f, "Analysis error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_input() {
        assert_eq!(
            CliError::FileNotFound("reviews/*.txt".to_string()).to_string(),
            "File not found: reviews/*.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[unclosed".to_string()).to_string(),
            "Invalid file pattern: [unclosed"
        );
        assert_eq!(
            CliError::ConfigError("kibun.toml: missing field".to_string()).to_string(),
            "Configuration error: kibun.toml: missing field"
        );
        assert_eq!(
            CliError::AnalysisError("provider 'huggingface' is not configured".to_string())
                .to_string(),
            "Analysis error: provider 'huggingface' is not configured"
        );
    }

    #[test]
    fn survives_the_anyhow_boundary() {
        // Commands return CliResult (anyhow), so the variant must stay
        // recoverable through a downcast.
        let err: anyhow::Error = CliError::FileNotFound("a.txt".to_string()).into();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
