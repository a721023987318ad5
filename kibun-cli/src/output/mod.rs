//! Output formatting module

use anyhow::Result;
use kibun_api::Report;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single analysis report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
