//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use kibun_api::Report;
use std::io::Write;

/// Text formatter - one labeled line per analyzed text
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{:+.4}\t{}",
            report.label, report.scores.compound, report.text
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
