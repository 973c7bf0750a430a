//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(path = %self.path.display(), "Initializing configuration file");

        if self.path.exists() && !self.force {
            println!(
                "❌ Configuration file already exists: {}",
                self.path.display()
            );
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.path, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.path.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {} to taste", self.path.display());
                println!("  2. Validate it: censor validate-config");
                println!("  3. Run: censor redact --input '*.txt' --output out --names --dates");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Default configuration with every option documented
    fn generate_config() -> String {
        r#"# censor configuration file
#
# Every setting is optional; the values below are the defaults.
# Values may reference environment variables with ${VAR_NAME}, and any
# setting can be overridden with CENSOR_<SECTION>_<KEY>.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Extraction
# ============================================================================
[extraction]
# Custom pattern library (TOML). Each group names a category:
#
#   [patterns.employee_id]
#   category = "names"
#   patterns = ['EMP-\d{4}']
#
# pattern_library = "./patterns/custom.toml"

# Word lists, one entry per line, '#' starts a comment
# given_names = "./data/given_names.txt"
# places = "./data/places.txt"

# ============================================================================
# Output
# ============================================================================
[output]
# Subfolder of --output that receives the masked copies
subfolder = ".censored"

# Extension replacing the input file's extension
suffix = "censored"

# ============================================================================
# Statistics
# ============================================================================
[stats]
# Used when --stats is not given: stdout, stderr, or a file path
destination = "stderr"

# text or json
format = "text"

# ============================================================================
# Logging
# ============================================================================
[logging]
# Write JSON logs to rotating files in addition to the console
local_enabled = false
local_path = "./logs"

# daily, hourly or never
local_rotation = "daily"

# ============================================================================
# Audit
# ============================================================================
[audit]
# Append one entry per censored file; masked values are stored as SHA-256
enabled = false
log_path = "./audit/censor.log"
json_format = true
"#
        .to_string()
    }
}
