//! History collaborator seam
//!
//! The engine emits one record per analysis; where it goes is the
//! sink's business. The built-in sinks are an append-only JSON-lines
//! file and an in-memory buffer for tests.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use kibun_core::SentimentLabel;

use crate::error::{EngineError, Result};

/// The tuple emitted after each analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// The analyzed text
    pub text: String,
    /// Normalized compound score
    pub compound: f64,
    /// Derived label
    pub label: SentimentLabel,
    /// Verified user identifier supplied by the caller
    pub user: String,
    /// Provider that produced the result
    pub provider: String,
    /// Seconds since the Unix epoch at record time
    pub recorded_at: u64,
}

impl AnalysisRecord {
    /// Build a record timestamped now
    pub fn new(
        text: impl Into<String>,
        compound: f64,
        label: SentimentLabel,
        user: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        let recorded_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            text: text.into(),
            compound,
            label,
            user: user.into(),
            provider: provider.into(),
            recorded_at,
        }
    }
}

/// Receives analysis records
///
/// Sinks must be safe to share across threads. Failures are surfaced
/// to the engine, which logs them without failing the analysis call.
pub trait HistorySink: Send + Sync {
    /// Append one record
    fn record(&self, record: &AnalysisRecord) -> Result<()>;
}

/// Append-only JSON-lines history file
#[derive(Debug)]
pub struct JsonlHistory {
    path: PathBuf,
    // Serializes appends from concurrent analysis calls.
    lock: Mutex<()>,
}

impl JsonlHistory {
    /// Create a sink writing to the given path
    ///
    /// The file is created on first append; parent directories must
    /// exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The file this sink appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records back from the file
    ///
    /// Used by the CLI `history` command; a missing file is an empty
    /// history, not an error.
    pub fn read_all(&self) -> Result<Vec<AnalysisRecord>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(EngineError::History(e.to_string())),
        };

        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| EngineError::History(e.to_string()))
            })
            .collect()
    }
}

impl HistorySink for JsonlHistory {
    fn record(&self, record: &AnalysisRecord) -> Result<()> {
        let line =
            serde_json::to_string(record).map_err(|e| EngineError::History(e.to_string()))?;

        let _guard = self.lock.lock().expect("history lock poisoned");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| EngineError::History(e.to_string()))?;
        writeln!(file, "{line}").map_err(|e| EngineError::History(e.to_string()))?;
        Ok(())
    }
}

/// In-memory history buffer
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Mutex<Vec<AnalysisRecord>>,
}

impl MemoryHistory {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded entries
    pub fn records(&self) -> Vec<AnalysisRecord> {
        self.records.lock().expect("history lock poisoned").clone()
    }
}

impl HistorySink for MemoryHistory {
    fn record(&self, record: &AnalysisRecord) -> Result<()> {
        self.records
            .lock()
            .expect("history lock poisoned")
            .push(record.clone());
        Ok(())
    }
}
