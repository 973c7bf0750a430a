//! Domain error types
//!
//! This module defines the error hierarchy for censor.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main censor error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum CensorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (unknown category, invalid regex)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Entity extraction errors
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Statistics report rendering or delivery errors
    #[error("Report error: {0}")]
    Report(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Per-file failure recorded during a batch run
///
/// A failed file never aborts the batch; it is collected here and reported
/// in the batch summary.
#[derive(Debug, Clone)]
pub struct FileErrorDetail {
    /// Path of the input file
    pub path: String,

    /// Stage at which processing failed
    pub stage: FileStage,

    /// Error message
    pub message: String,
}

/// Processing stage of a single input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
    /// Reading the input document
    Read,
    /// Running the extractors
    Extract,
    /// Writing the masked copy
    Write,
}

impl std::fmt::Display for FileStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Extract => write!(f, "extract"),
            Self::Write => write!(f, "write"),
        }
    }
}

impl FileErrorDetail {
    /// Creates a new file error detail
    pub fn new(path: impl Into<String>, stage: FileStage, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            stage,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CensorError {
    fn from(err: std::io::Error) -> Self {
        CensorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CensorError {
    fn from(err: serde_json::Error) -> Self {
        CensorError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CensorError {
    fn from(err: toml::de::Error) -> Self {
        CensorError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_censor_error_display() {
        let err = CensorError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_file_error_detail() {
        let detail = FileErrorDetail::new("docs/a.txt", FileStage::Write, "permission denied");
        assert_eq!(detail.path, "docs/a.txt");
        assert_eq!(detail.stage, FileStage::Write);
        assert_eq!(detail.stage.to_string(), "write");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CensorError = io_err.into();
        assert!(matches!(err, CensorError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CensorError = json_err.into();
        assert!(matches!(err, CensorError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CensorError = toml_err.into();
        assert!(matches!(err, CensorError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
