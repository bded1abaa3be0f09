//! Structured logging for harness workflows.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record
//! - [`LogEmitter`]: writes JSONL lines to a file or stdout

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Test/verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `level`, `event`. The rest add per-case
/// context for verification runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    pub fn new(timestamp: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            level,
            event: event.into(),
            campaign: None,
            case: None,
            outcome: None,
            detail: None,
        }
    }
}

/// Writes JSONL log lines to a file or stdout.
pub struct LogEmitter {
    writer: Box<dyn Write>,
}

impl LogEmitter {
    /// Emit to a file, truncating any existing content.
    pub fn to_file(path: &Path) -> Result<Self, HarnessError> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: Box::new(file),
        })
    }

    /// Emit to stdout.
    pub fn to_stdout() -> Self {
        Self {
            writer: Box::new(std::io::stdout()),
        }
    }

    /// Write one entry as a JSON line.
    pub fn emit(&mut self, entry: &LogEntry) -> Result<(), HarnessError> {
        let line = serde_json::to_string(entry)?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}
