//! Validate config command implementation
//!
//! Loads the configuration the way `redact` would and checks that the
//! configured pattern library and word lists load.

use crate::config::{load_or_default, DEFAULT_CONFIG_FILE};
use crate::extract::ExtractorSet;
use crate::redaction::Category;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let shown = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        tracing::info!(config_path = %shown, "Validating configuration");

        println!("🔍 Validating configuration: {shown}");
        println!();

        if config_path.is_none() && !Path::new(DEFAULT_CONFIG_FILE).exists() {
            println!("ℹ️  No configuration file found, checking built-in defaults");
        }

        let config = match load_or_default(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded and valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let extractors = match ExtractorSet::from_config(&config.extraction) {
            Ok(set) => {
                println!("✅ Extractors loaded");
                set
            }
            Err(e) => {
                println!("❌ Failed to load extractors");
                println!("   Error: {e:#}");
                return Ok(2);
            }
        };

        let source = |path: &Option<std::path::PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Pattern Library: {}", source(&config.extraction.pattern_library));
        println!("  Given Names: {}", source(&config.extraction.given_names));
        println!("  Places: {}", source(&config.extraction.places));
        for category in Category::ALL {
            println!(
                "  {} Extractors: {}",
                category.label(),
                extractors.count(category)
            );
        }
        println!(
            "  Output: <output>/{}/<name>.{}",
            config.output.subfolder, config.output.suffix
        );
        println!(
            "  Stats: {} ({})",
            config.stats.destination, config.stats.format
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!(
            "  Audit Log: {}",
            if config.audit.enabled {
                config.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_explicit_file() {
        let code = ValidateArgs {}
            .execute(Some(Path::new("/nonexistent/censor.toml")))
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[stats]\ndestination = \"stdout\"\n").unwrap();
        file.flush().unwrap();

        let code = ValidateArgs {}.execute(Some(file.path())).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_broken_pattern_library() {
        let dir = tempfile::tempdir().unwrap();
        let library = dir.path().join("patterns.toml");
        std::fs::write(
            &library,
            "[patterns.bad]\ncategory = \"dates\"\npatterns = ['(unclosed']\n",
        )
        .unwrap();
        let config_path = dir.path().join("censor.toml");
        std::fs::write(
            &config_path,
            format!(
                "[extraction]\npattern_library = \"{}\"\n",
                library.display().to_string().replace('\\', "/")
            ),
        )
        .unwrap();

        let code = ValidateArgs {}.execute(Some(&config_path)).await.unwrap();
        assert_eq!(code, 2);
    }
}
