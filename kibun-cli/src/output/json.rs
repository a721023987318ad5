//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kibun_api::Report;
use std::io::Write;

/// JSON formatter - outputs reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<Report>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a pretty-printing JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            reports: Vec::new(),
        }
    }

    /// Create a single-line JSON formatter (config `pretty_json = false`)
    pub fn compact(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
