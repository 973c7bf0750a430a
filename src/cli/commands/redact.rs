//! Redact command implementation
//!
//! This module implements the `redact` command: mask the selected entity
//! categories in every matched file and report where they were found.

use crate::config::CensorConfig;
use crate::core::{BatchProcessor, OutputLayout};
use crate::extract::ExtractorSet;
use crate::redaction::audit::AuditLogger;
use crate::redaction::{Category, CategorySelection, ReportFormat, StatsDestination};
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Glob pattern(s) selecting the input files
    #[arg(short, long, value_name = "GLOB", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output directory; masked copies go to its `.censored` subfolder
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Mask person names
    #[arg(long)]
    pub names: bool,

    /// Mask dates
    #[arg(long)]
    pub dates: bool,

    /// Mask addresses and place names
    #[arg(long, alias = "addresses")]
    pub address: bool,

    /// Mask phone numbers
    #[arg(long)]
    pub phones: bool,

    /// Statistics destination: stdout, stderr, or a file path
    #[arg(long, value_name = "DEST")]
    pub stats: Option<String>,

    /// Statistics format (text or json)
    #[arg(long, value_name = "FORMAT")]
    pub stats_format: Option<ReportFormat>,
}

impl RedactArgs {
    /// Categories requested on the command line
    pub fn selection(&self) -> CategorySelection {
        CategorySelection::none()
            .with_if(Category::Names, self.names)
            .with_if(Category::Dates, self.dates)
            .with_if(Category::Addresses, self.address)
            .with_if(Category::Phones, self.phones)
    }

    /// Execute the redact command
    pub async fn execute(
        &self,
        config: &CensorConfig,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let selection = self.selection();
        let destination = StatsDestination::parse(
            self.stats.as_deref().unwrap_or(&config.stats.destination),
        );
        let format = self.stats_format.unwrap_or(config.stats.format);

        tracing::info!(
            inputs = ?self.input,
            output = %self.output.display(),
            categories = ?selection.iter().map(Category::key).collect::<Vec<_>>(),
            stats = %destination,
            "Starting redact command"
        );

        let inputs = match BatchProcessor::expand_inputs(&self.input) {
            Ok(inputs) => inputs,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to expand input patterns");
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let extractors = match ExtractorSet::from_config(&config.extraction) {
            Ok(set) => set,
            Err(e) => {
                let message = format!("{e:#}");
                tracing::error!(error = %message, "Failed to build extractors");
                eprintln!("❌ Failed to build extractors: {message}");
                return Ok(2);
            }
        };

        let mut processor = BatchProcessor::new(
            extractors,
            OutputLayout::new(&self.output, &config.output),
            shutdown_signal,
        );

        if config.audit.enabled {
            let audit = AuditLogger::new(config.audit.log_path.clone(), config.audit.json_format)?;
            tracing::info!(path = %config.audit.log_path.display(), "Audit logging enabled");
            processor = processor.with_audit(audit);
        }

        let outcome = match tokio::task::spawn_blocking(move || {
            processor.run(&inputs, &selection)
        })
        .await?
        {
            Ok(outcome) => outcome,
            Err(e) => {
                crate::log_error_with_context!(&e, "Batch failed");
                eprintln!("❌ {e}");
                return Ok(5);
            }
        };

        if let Err(e) = outcome.report.write_to(&destination, format) {
            crate::log_error_with_context!(&e, "Failed to write statistics");
            eprintln!("❌ {e}");
            return Ok(3);
        }

        // Keep standard-stream reports free of anything but the report.
        if matches!(destination, StatsDestination::File(_)) {
            eprint!("{}", outcome.summary.render_console());
        }

        let summary = &outcome.summary;
        let exit_code = if summary.interrupted {
            tracing::info!("Redaction interrupted by user signal");
            130
        } else if summary.is_successful() {
            0
        } else {
            1
        };

        Ok(exit_code)
    }
}
