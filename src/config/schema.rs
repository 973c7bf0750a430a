//! Configuration schema types

use crate::redaction::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main censor configuration
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CensorConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Extractor sources
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Masked-copy layout
    #[serde(default)]
    pub output: OutputConfig,

    /// Statistics report defaults
    #[serde(default)]
    pub stats: StatsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl CensorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.extraction.validate()?;
        self.output.validate()?;
        self.stats.validate()?;
        self.logging.validate()?;
        self.audit.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Extractor sources
///
/// Unset paths fall back to the embedded defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Path to a pattern library TOML file
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Path to a given-name word list
    #[serde(default)]
    pub given_names: Option<PathBuf>,

    /// Path to a place-name word list
    #[serde(default)]
    pub places: Option<PathBuf>,
}

impl ExtractionConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                ));
            }
        }
        for (label, path) in [("given_names", &self.given_names), ("places", &self.places)] {
            if let Some(path) = path {
                if !path.exists() {
                    return Err(format!("{label} word list not found: {}", path.display()));
                }
            }
        }
        Ok(())
    }
}

/// Layout of masked copies inside the output directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Reserved subfolder of the output directory
    #[serde(default = "default_subfolder")]
    pub subfolder: String,

    /// Extension given to masked copies (without the dot)
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            subfolder: default_subfolder(),
            suffix: default_suffix(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.subfolder.trim().is_empty() {
            return Err("output.subfolder cannot be empty".to_string());
        }
        if PathBuf::from(&self.subfolder).is_absolute() || self.subfolder.contains("..") {
            return Err(format!(
                "output.subfolder must be a relative folder name: {}",
                self.subfolder
            ));
        }
        if self.suffix.is_empty() || self.suffix.contains(['/', '\\', '.']) {
            return Err(format!(
                "output.suffix must be a bare extension without dots or separators: '{}'",
                self.suffix
            ));
        }
        Ok(())
    }
}

/// Statistics report defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Destination used when `--stats` is not given: stdout, stderr, or a path
    #[serde(default = "default_stats_destination")]
    pub destination: String,

    /// Report format
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            destination: default_stats_destination(),
            format: ReportFormat::default(),
        }
    }
}

impl StatsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("stats.destination cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rotating local files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation (daily, hourly, never)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_subfolder() -> String {
    ".censored".to_string()
}

fn default_suffix() -> String {
    "censored".to_string()
}

fn default_stats_destination() -> String {
    "stderr".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/censor.log")
}

fn default_audit_json_format() -> bool {
    true
}
