//! Statistics report for a batch of redacted documents
//!
//! The text format is one block per file:
//!
//! ```text
//! File: letter.txt
//! Names: Count = 1, Positions = [(0, 4)]
//! Dates: Count = 0, Positions = []
//! Addresses: Count = 1, Positions = [(14, 19)]
//! Phones: Count = 1, Positions = [(28, 36)]
//!
//! ```
//!
//! Standard stream destinations receive one extra trailing newline; file
//! destinations receive the rendered text unchanged.

use super::stats::RedactionStats;
use crate::domain::{CensorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the statistics report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsDestination {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
    /// A file, overwritten if it exists
    File(PathBuf),
}

impl StatsDestination {
    /// Parse a destination selector: `stdout`, `stderr`, or a file path
    pub fn parse(value: &str) -> Self {
        match value {
            "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl std::fmt::Display for StatsDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::Stderr => write!(f, "stderr"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Rendering format of the statistics report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Line-oriented text, one block per file
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = CensorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CensorError::Validation(format!(
                "Invalid report format '{s}'. Must be one of: text, json"
            ))),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Statistics of one processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    /// File name as shown in the report
    pub file: String,
    /// Redaction statistics
    pub stats: RedactionStats,
}

/// Ordered batch of per-file statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    files: Vec<FileStats>,
}

impl StatsReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the statistics of one file
    pub fn add(&mut self, file: impl Into<String>, stats: RedactionStats) {
        self.files.push(FileStats {
            file: file.into(),
            stats,
        });
    }

    /// Entries in insertion order
    pub fn files(&self) -> &[FileStats] {
        &self.files
    }

    /// Number of files in the report
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when no file was added
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Render the text format
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.files {
            let _ = writeln!(out, "File: {}", entry.file);
            for (category, stats) in entry.stats.iter() {
                let positions = stats
                    .spans()
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(
                    out,
                    "{}: Count = {}, Positions = [{}]",
                    category.label(),
                    stats.count(),
                    positions
                );
            }
            out.push('\n');
        }
        out
    }

    /// Render the JSON format
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json(),
        }
    }

    /// Render and deliver the report
    ///
    /// # Errors
    ///
    /// Returns [`CensorError::Serialization`] if JSON rendering fails and
    /// [`CensorError::Report`] if the destination cannot be written.
    pub fn write_to(&self, destination: &StatsDestination, format: ReportFormat) -> Result<()> {
        let rendered = self.render(format)?;

        let written = match destination {
            StatsDestination::Stdout => {
                Self::write_stream(&mut std::io::stdout().lock(), &rendered)
            }
            StatsDestination::Stderr => {
                Self::write_stream(&mut std::io::stderr().lock(), &rendered)
            }
            StatsDestination::File(path) => std::fs::write(path, &rendered),
        };

        written.map_err(|e| {
            CensorError::Report(format!("Failed to write statistics to {destination}: {e}"))
        })?;

        tracing::debug!(destination = %destination, files = self.len(), "Statistics written");
        Ok(())
    }

    fn write_stream<W: Write>(writer: &mut W, rendered: &str) -> std::io::Result<()> {
        writer.write_all(rendered.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
