//! Audit logger for redaction runs
//!
//! Every masked document produces one entry. Masked values are recorded as
//! SHA-256 hashes only; plaintext never reaches the audit log.

use super::category::Category;
use super::stats::RedactionStats;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    file: String,
    total_masked: usize,
    categories: Vec<AuditCategory>,
}

/// Per-category audit record
#[derive(Debug, Serialize)]
struct AuditCategory {
    category: Category,
    count: usize,
    /// SHA-256 of each masked value, in discovery order
    value_hashes: Vec<String>,
}

/// Append-only audit logger
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Log the redaction of one document
    ///
    /// `original` is the unmasked text the spans in `stats` refer to.
    pub fn log_document(&self, file: &str, original: &str, stats: &RedactionStats) -> Result<()> {
        let chars: Vec<char> = original.chars().collect();

        let categories = stats
            .iter()
            .map(|(category, category_stats)| AuditCategory {
                category,
                count: category_stats.count(),
                value_hashes: category_stats
                    .spans()
                    .iter()
                    .filter_map(|span| chars.get(span.start..span.end))
                    .map(|value| Self::hash_value(&value.iter().collect::<String>()))
                    .collect(),
            })
            .collect();

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            file: file.to_string(),
            total_masked: stats.total(),
            categories,
        };

        self.write_entry(&entry)
    }

    /// Hash a masked value using SHA-256
    fn hash_value(value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let counts = entry
                .categories
                .iter()
                .map(|c| format!("{}={}", c.category.key(), c.count))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                file,
                "[{}] File: {} | Masked: {} | {}",
                entry.timestamp, entry.file, entry.total_masked, counts
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
