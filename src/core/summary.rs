//! Batch summary and reporting
//!
//! Tracks what happened to every matched file of a `redact` run.

use crate::domain::FileErrorDetail;
use crate::redaction::{Category, RedactionStats};
use std::fmt::Write as _;
use std::time::Duration;

/// Summary of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Number of files matched by the input patterns
    pub files_matched: usize,

    /// Number of files whose masked copy was written
    pub files_processed: usize,

    /// Number of files that failed at some stage
    pub files_failed: usize,

    /// Number of matched files left untouched after a shutdown request
    pub files_skipped: usize,

    /// Masked occurrences per category, indexed by rank
    masked: [usize; 4],

    /// Duration of the run
    pub duration: Duration,

    /// Per-file failures
    pub errors: Vec<FileErrorDetail>,

    /// True when the run stopped early on a shutdown request
    pub interrupted: bool,
}

impl BatchSummary {
    /// Create a new empty summary
    pub fn new(files_matched: usize) -> Self {
        Self {
            files_matched,
            ..Self::default()
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add the counts of one masked document
    pub fn record(&mut self, stats: &RedactionStats) {
        for (category, entry) in stats.iter() {
            self.masked[category.rank()] += entry.count();
        }
    }

    /// Record a failed file
    pub fn add_error(&mut self, error: FileErrorDetail) {
        self.files_failed += 1;
        self.errors.push(error);
    }

    /// Masked occurrences of one category across the batch
    pub fn masked(&self, category: Category) -> usize {
        self.masked[category.rank()]
    }

    /// Masked occurrences across all categories
    pub fn masked_total(&self) -> usize {
        self.masked.iter().sum()
    }

    /// True when no file failed
    pub fn is_successful(&self) -> bool {
        self.files_failed == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            matched = self.files_matched,
            processed = self.files_processed,
            failed = self.files_failed,
            skipped = self.files_skipped,
            names = self.masked(Category::Names),
            dates = self.masked(Category::Dates),
            addresses = self.masked(Category::Addresses),
            phones = self.masked(Category::Phones),
            duration_ms = self.duration.as_millis(),
            interrupted = self.interrupted,
            "Batch completed"
        );

        for error in &self.errors {
            tracing::warn!(
                file = %error.path,
                stage = %error.stage,
                message = %error.message,
                "File failed"
            );
        }
    }

    /// Short human-readable summary for the console
    pub fn render_console(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Censored {} of {} file(s) in {:.2}s",
            self.files_processed,
            self.files_matched,
            self.duration.as_secs_f64()
        );
        let _ = writeln!(
            out,
            "Masked: {} (names {}, dates {}, addresses {}, phones {})",
            self.masked_total(),
            self.masked(Category::Names),
            self.masked(Category::Dates),
            self.masked(Category::Addresses),
            self.masked(Category::Phones)
        );
        if self.interrupted {
            let _ = writeln!(
                out,
                "Interrupted: {} file(s) not processed",
                self.files_skipped
            );
        }
        for error in &self.errors {
            let _ = writeln!(out, "Failed ({}): {}: {}", error.stage, error.path, error.message);
        }
        out
    }
}
