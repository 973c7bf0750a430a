//! Batch processing of input documents
//!
//! Expands the input patterns, then censors one file at a time: read,
//! extract, mask, write. A failing file is recorded and the batch moves on.

use crate::core::output::OutputLayout;
use crate::core::summary::BatchSummary;
use crate::domain::{CensorError, FileErrorDetail, FileStage, Result};
use crate::extract::ExtractorSet;
use crate::redaction::audit::AuditLogger;
use crate::redaction::{CategorySelection, MaskEngine, RedactionStats, StatsReport};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::sync::watch;

/// Result of a batch run
#[derive(Debug)]
pub struct BatchOutcome {
    /// Per-file statistics in processing order
    pub report: StatsReport,
    /// What happened to every matched file
    pub summary: BatchSummary,
}

/// Outcome of a single file that made it past extraction
struct CensoredFile {
    name: String,
    stats: RedactionStats,
    write_error: Option<FileErrorDetail>,
}

/// Batch processor
pub struct BatchProcessor {
    extractors: ExtractorSet,
    engine: MaskEngine,
    layout: OutputLayout,
    audit: Option<AuditLogger>,
    shutdown: watch::Receiver<bool>,
}

impl BatchProcessor {
    /// Create a new batch processor
    pub fn new(
        extractors: ExtractorSet,
        layout: OutputLayout,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            extractors,
            engine: MaskEngine::new(),
            layout,
            audit: None,
            shutdown,
        }
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Output layout in use
    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Expand glob patterns into the list of files to process
    ///
    /// Matches of each pattern are sorted; a file matched by several
    /// patterns appears once, at its first position. Directories are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CensorError::Validation`] for a malformed pattern
    pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for pattern in patterns {
            let entries = glob::glob(pattern).map_err(|e| {
                CensorError::Validation(format!("Invalid input pattern '{pattern}': {e}"))
            })?;

            let mut matched = Vec::new();
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => matched.push(path),
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(pattern = %pattern, error = %e, "Skipping unreadable path");
                    }
                }
            }
            matched.sort();

            if matched.is_empty() {
                tracing::warn!(pattern = %pattern, "Input pattern matched no files");
            }

            for path in matched {
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }

    /// Censor every file in `inputs`
    ///
    /// The shutdown flag is checked before each file; files not reached are
    /// counted as skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only when the output directory cannot be created
    pub fn run(&self, inputs: &[PathBuf], selection: &CategorySelection) -> Result<BatchOutcome> {
        let start_time = Instant::now();
        let mut report = StatsReport::new();
        let mut summary = BatchSummary::new(inputs.len());

        self.layout.ensure()?;

        if selection.is_empty() {
            tracing::warn!("No categories selected; masked copies will equal their inputs");
        }

        let mut written: HashSet<PathBuf> = HashSet::new();

        for (index, path) in inputs.iter().enumerate() {
            if *self.shutdown.borrow() {
                tracing::warn!(
                    remaining = inputs.len() - index,
                    "Shutdown requested, stopping batch"
                );
                summary.interrupted = true;
                summary.files_skipped = inputs.len() - index;
                break;
            }

            let target = self.layout.censored_path(path);
            if !written.insert(target.clone()) {
                tracing::warn!(
                    file = %path.display(),
                    target = %target.display(),
                    "Masked copy name already used in this batch, overwriting"
                );
            }

            crate::log_file_start!(path.display(), index + 1);
            let file_start = Instant::now();

            match self.process_file(path, &target, selection) {
                Ok(censored) => {
                    summary.record(&censored.stats);
                    match censored.write_error {
                        Some(error) => summary.add_error(error),
                        None => {
                            summary.files_processed += 1;
                            crate::log_file_complete!(
                                path.display(),
                                censored.stats.total(),
                                file_start.elapsed()
                            );
                        }
                    }
                    report.add(censored.name, censored.stats);
                }
                Err(error) => {
                    tracing::error!(
                        file = %error.path,
                        stage = %error.stage,
                        error = %error.message,
                        "Failed to censor file"
                    );
                    summary.add_error(error);
                }
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(BatchOutcome { report, summary })
    }

    fn process_file(
        &self,
        path: &Path,
        target: &Path,
        selection: &CategorySelection,
    ) -> std::result::Result<CensoredFile, FileErrorDetail> {
        let source = path.display().to_string();

        let text = std::fs::read_to_string(path)
            .map_err(|e| FileErrorDetail::new(&source, FileStage::Read, e.to_string()))?;

        let literals = self
            .extractors
            .extract(&text, selection)
            .map_err(|e| FileErrorDetail::new(&source, FileStage::Extract, e.to_string()))?;

        let (masked, stats) = self.engine.mask(&text, &literals).into_parts();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.clone());

        let write_error = std::fs::write(target, masked).err().map(|e| {
            tracing::error!(
                file = %source,
                target = %target.display(),
                error = %e,
                "Failed to write masked copy"
            );
            FileErrorDetail::new(
                &source,
                FileStage::Write,
                format!("{}: {}", target.display(), e),
            )
        });

        // Only masking that produced a copy is audited.
        if write_error.is_none() {
            if let Some(audit) = &self.audit {
                if let Err(e) = audit.log_document(&name, &text, &stats) {
                    tracing::warn!(file = %source, error = %e, "Failed to write audit entry");
                }
            }
        }

        Ok(CensoredFile {
            name,
            stats,
            write_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::extract::Extractor;
    use crate::redaction::{Category, MASK_GLYPH};
    use std::fs;
    use tempfile::TempDir;

    struct ListExtractor(Vec<&'static str>);

    impl Extractor for ListExtractor {
        fn name(&self) -> &str {
            "list"
        }

        fn extract(&self, text: &str) -> anyhow::Result<Vec<String>> {
            Ok(self
                .0
                .iter()
                .filter(|v| text.contains(**v))
                .map(|v| v.to_string())
                .collect())
        }
    }

    fn processor(output: &Path, shutdown: watch::Receiver<bool>) -> BatchProcessor {
        let extractors = ExtractorSet::new()
            .with(Category::Names, ListExtractor(vec!["John"]))
            .with(Category::Addresses, ListExtractor(vec!["Paris"]))
            .with(Category::Phones, ListExtractor(vec!["555-1234"]));
        BatchProcessor::new(
            extractors,
            OutputLayout::new(output, &OutputConfig::default()),
            shutdown,
        )
    }

    fn pattern(dir: &Path, glob: &str) -> String {
        dir.join(glob).to_string_lossy().into_owned()
    }

    #[test]
    fn test_expand_inputs_sorted_and_deduplicated() {
        let input = TempDir::new().unwrap();
        fs::write(input.path().join("b.txt"), "b").unwrap();
        fs::write(input.path().join("a.txt"), "a").unwrap();
        fs::write(input.path().join("c.md"), "c").unwrap();
        fs::create_dir(input.path().join("dir.txt")).unwrap();

        let files = BatchProcessor::expand_inputs(&[
            pattern(input.path(), "*.txt"),
            pattern(input.path(), "*"),
        ])
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.md"]);
    }

    #[test]
    fn test_expand_inputs_invalid_pattern() {
        let err = BatchProcessor::expand_inputs(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, CensorError::Validation(_)));
    }

    #[test]
    fn test_run_writes_masked_copies() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let source = input.path().join("letter.txt");
        fs::write(&source, "John lives in Paris. Phone: 555-1234.").unwrap();

        let (_tx, rx) = watch::channel(false);
        let outcome = processor(output.path(), rx)
            .run(&[source], &CategorySelection::all())
            .unwrap();

        let masked =
            fs::read_to_string(output.path().join(".censored").join("letter.censored")).unwrap();
        assert_eq!(masked, "████ lives in █████. Phone: ████████.");
        assert_eq!(outcome.summary.files_processed, 1);
        assert_eq!(outcome.summary.masked_total(), 3);
        assert_eq!(outcome.report.files()[0].file, "letter.txt");
    }

    #[test]
    fn test_unreadable_file_does_not_abort_batch() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let bad = input.path().join("a.bin");
        let good = input.path().join("b.txt");
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();
        fs::write(&good, "Call John").unwrap();

        let (_tx, rx) = watch::channel(false);
        let outcome = processor(output.path(), rx)
            .run(&[bad, good], &CategorySelection::all())
            .unwrap();

        assert_eq!(outcome.summary.files_failed, 1);
        assert_eq!(outcome.summary.errors[0].stage, FileStage::Read);
        assert_eq!(outcome.summary.files_processed, 1);
        assert_eq!(outcome.report.len(), 1);
        assert_eq!(outcome.report.files()[0].file, "b.txt");
    }

    #[test]
    fn test_unselected_categories_left_visible() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let source = input.path().join("note.txt");
        fs::write(&source, "John lives in Paris.").unwrap();

        let (_tx, rx) = watch::channel(false);
        let selection = CategorySelection::none().with(Category::Addresses);
        let outcome = processor(output.path(), rx).run(&[source], &selection).unwrap();

        let masked =
            fs::read_to_string(output.path().join(".censored").join("note.censored")).unwrap();
        assert_eq!(masked, "John lives in █████.");
        assert!(!masked.starts_with(MASK_GLYPH));
        assert_eq!(outcome.summary.masked(Category::Names), 0);
    }

    #[test]
    fn test_shutdown_stops_between_files() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let first = input.path().join("a.txt");
        let second = input.path().join("b.txt");
        fs::write(&first, "John").unwrap();
        fs::write(&second, "John").unwrap();

        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        let outcome = processor(output.path(), rx)
            .run(&[first, second], &CategorySelection::all())
            .unwrap();

        assert!(outcome.summary.interrupted);
        assert_eq!(outcome.summary.files_skipped, 2);
        assert!(outcome.report.is_empty());
    }

    #[test]
    fn test_audit_entry_written() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let source = input.path().join("a.txt");
        fs::write(&source, "John").unwrap();
        let audit_path = output.path().join("audit").join("censor.log");

        let (_tx, rx) = watch::channel(false);
        let batch = processor(output.path(), rx)
            .with_audit(AuditLogger::new(audit_path.clone(), true).unwrap());
        batch.run(&[source], &CategorySelection::all()).unwrap();

        let audit = fs::read_to_string(audit_path).unwrap();
        assert!(audit.contains("\"file\":\"a.txt\""));
        assert!(!audit.contains("John"));
    }

    #[test]
    fn test_failed_write_keeps_stats_but_skips_audit() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let blocked = input.path().join("a.txt");
        let ok = input.path().join("b.txt");
        fs::write(&blocked, "John").unwrap();
        fs::write(&ok, "John").unwrap();
        // A directory in place of the masked copy makes the write fail.
        fs::create_dir_all(output.path().join(".censored").join("a.censored")).unwrap();
        let audit_path = output.path().join("audit").join("censor.log");

        let (_tx, rx) = watch::channel(false);
        let batch = processor(output.path(), rx)
            .with_audit(AuditLogger::new(audit_path.clone(), true).unwrap());
        let outcome = batch
            .run(&[blocked, ok], &CategorySelection::all())
            .unwrap();

        assert_eq!(outcome.summary.files_failed, 1);
        assert_eq!(outcome.summary.errors[0].stage, FileStage::Write);
        assert_eq!(outcome.report.len(), 2);
        assert_eq!(outcome.report.files()[0].stats.count(Category::Names), 1);

        let audit = fs::read_to_string(audit_path).unwrap();
        assert!(!audit.contains("\"file\":\"a.txt\""));
        assert!(audit.contains("\"file\":\"b.txt\""));
    }
}
