//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON log files with rotation
//! - Level from configuration, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use censor::logging::init_logging;
//! use censor::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of processing one input file
///
/// # Example
///
/// ```no_run
/// use censor::log_file_start;
///
/// log_file_start!("notes/letter.txt", 3);
/// ```
#[macro_export]
macro_rules! log_file_start {
    ($file:expr, $index:expr) => {
        tracing::info!(file = %$file, index = $index, "Processing file");
    };
}

/// Log the completion of one input file
///
/// # Example
///
/// ```no_run
/// use censor::log_file_complete;
/// use std::time::Duration;
///
/// log_file_complete!("notes/letter.txt", 7, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_file_complete {
    ($file:expr, $masked:expr, $duration:expr) => {
        tracing::info!(
            file = %$file,
            masked = $masked,
            duration_ms = $duration.as_millis(),
            "File censored"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use censor::log_error_with_context;
/// use censor::domain::CensorError;
///
/// let error = CensorError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
