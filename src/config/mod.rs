//! Configuration management for censor.
//!
//! Settings come from an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `CENSOR_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use censor::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("censor.toml")?;
//! println!("Masked copies go to: {}", config.output.subfolder);
//! println!("Stats destination: {}", config.stats.destination);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level
//! - [`ExtractionConfig`] - custom pattern library and word lists
//! - [`OutputConfig`] - reserved subfolder and suffix of masked copies
//! - [`StatsConfig`] - default report destination and format
//! - [`LoggingConfig`] - rotating JSON log files
//! - [`AuditConfig`] - hashed audit trail
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [extraction]
//! given_names = "${CENSOR_LISTS}/given_names.txt"
//!
//! [output]
//! subfolder = ".censored"
//! suffix = "censored"
//!
//! [stats]
//! destination = "stdout"
//! format = "text"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, AuditConfig, CensorConfig, ExtractionConfig, LoggingConfig, OutputConfig,
    StatsConfig,
};
