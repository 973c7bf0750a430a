//! Placement of masked copies

use crate::config::OutputConfig;
use crate::domain::{CensorError, Result};
use std::path::{Path, PathBuf};

/// Where masked copies are written
///
/// `letter.txt` processed with output directory `out` lands at
/// `out/.censored/letter.censored` with the default configuration.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    suffix: String,
}

impl OutputLayout {
    /// Create a layout below `output_dir`
    pub fn new(output_dir: impl AsRef<Path>, config: &OutputConfig) -> Self {
        Self {
            root: output_dir.as_ref().join(&config.subfolder),
            suffix: config.suffix.clone(),
        }
    }

    /// Directory receiving the masked copies
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            CensorError::Io(format!(
                "Failed to create output directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    /// Path of the masked copy for `input`
    ///
    /// The last extension of the input name is replaced by the suffix.
    pub fn censored_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.root.join(format!("{stem}.{}", self.suffix))
    }
}
