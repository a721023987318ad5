//! History command implementation

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use kibun_api::JsonlHistory;

use crate::error::CliResult;

/// Arguments for the history command
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History file to read
    #[arg(long, value_name = "FILE", default_value = "kibun-history.jsonl")]
    pub history: PathBuf,

    /// Only show entries for this user
    #[arg(short, long, value_name = "ID")]
    pub user: Option<String>,

    /// Show at most the last N entries
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Emit JSON instead of the tabular form
    #[arg(long)]
    pub json: bool,
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self) -> CliResult<()> {
        let sink = JsonlHistory::new(&self.history);
        let mut records = sink
            .read_all()
            .with_context(|| format!("Failed to read {}", self.history.display()))?;

        if let Some(user) = &self.user {
            records.retain(|r| &r.user == user);
        }
        if let Some(limit) = self.limit {
            let start = records.len().saturating_sub(limit);
            records.drain(..start);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            for record in &records {
                println!(
                    "{}\t{}\t{}\t{:+.4}\t{}",
                    record.recorded_at, record.user, record.label, record.compound, record.text
                );
            }
        }

        Ok(())
    }
}
