//! Batch orchestration for censor.
//!
//! # Modules
//!
//! - [`batch`] - Input expansion and per-file censoring
//! - [`output`] - Placement of masked copies
//! - [`summary`] - Batch results for logs and the console
//!
//! # Workflow
//!
//! 1. **Expand**: resolve the input glob patterns into a sorted file list
//! 2. **Extract**: collect the sensitive literals of the selected categories
//! 3. **Mask**: replace every occurrence with the mask glyph
//! 4. **Write**: store the masked copy in the reserved output subfolder
//! 5. **Report**: hand the per-file statistics to the reporter
//!
//! # Example
//!
//! ```rust,no_run
//! use censor::config::CensorConfig;
//! use censor::core::{BatchProcessor, OutputLayout};
//! use censor::extract::ExtractorSet;
//! use censor::redaction::CategorySelection;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CensorConfig::default();
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! let processor = BatchProcessor::new(
//!     ExtractorSet::from_config(&config.extraction)?,
//!     OutputLayout::new("out", &config.output),
//!     shutdown_rx,
//! );
//!
//! let inputs = BatchProcessor::expand_inputs(&["docs/*.txt".to_string()])?;
//! let outcome = processor.run(&inputs, &CategorySelection::all())?;
//! print!("{}", outcome.report.render_text());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod output;
pub mod summary;

pub use batch::{BatchOutcome, BatchProcessor};
pub use output::OutputLayout;
pub use summary::BatchSummary;
