//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CensorConfig;
use crate::domain::errors::CensorError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "censor.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CensorConfig
/// 4. Applies environment variable overrides (CENSOR_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use censor::config::loader::load_config;
///
/// let config = load_config("censor.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CensorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CensorError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CensorError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CensorConfig = toml::from_str(&contents)
        .map_err(|e| CensorError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads the configuration the CLI should run with
///
/// An explicit path must exist. Without one, `censor.toml` in the working
/// directory is used when present, and built-in defaults otherwise.
/// Environment overrides apply in every case.
pub fn load_or_default(explicit: Option<&Path>) -> Result<CensorConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return load_config(default_path);
    }

    let mut config = CensorConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut CensorConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        CensorError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CensorError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CensorError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CENSOR_* prefix
///
/// Environment variables follow the pattern: CENSOR_<SECTION>_<KEY>
/// For example: CENSOR_STATS_FORMAT, CENSOR_OUTPUT_SUFFIX
fn apply_env_overrides(config: &mut CensorConfig) -> Result<()> {
    if let Ok(val) = std::env::var("CENSOR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Extraction overrides
    if let Ok(val) = std::env::var("CENSOR_EXTRACTION_PATTERN_LIBRARY") {
        config.extraction.pattern_library = Some(val.into());
    }
    if let Ok(val) = std::env::var("CENSOR_EXTRACTION_GIVEN_NAMES") {
        config.extraction.given_names = Some(val.into());
    }
    if let Ok(val) = std::env::var("CENSOR_EXTRACTION_PLACES") {
        config.extraction.places = Some(val.into());
    }

    // Output overrides
    if let Ok(val) = std::env::var("CENSOR_OUTPUT_SUBFOLDER") {
        config.output.subfolder = val;
    }
    if let Ok(val) = std::env::var("CENSOR_OUTPUT_SUFFIX") {
        config.output.suffix = val;
    }

    // Stats overrides
    if let Ok(val) = std::env::var("CENSOR_STATS_DESTINATION") {
        config.stats.destination = val;
    }
    if let Ok(val) = std::env::var("CENSOR_STATS_FORMAT") {
        config.stats.format = val.parse()?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CENSOR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CENSOR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CENSOR_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    // Audit overrides
    if let Ok(val) = std::env::var("CENSOR_AUDIT_ENABLED") {
        config.audit.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CENSOR_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }
    if let Ok(val) = std::env::var("CENSOR_AUDIT_JSON_FORMAT") {
        config.audit.json_format = val.parse().unwrap_or(true);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CENSOR_LOADER_TEST_VAR", "/srv/lists/names.txt");
        let input = "given_names = \"${CENSOR_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "given_names = \"/srv/lists/names.txt\"\n");
        std::env::remove_var("CENSOR_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CENSOR_LOADER_MISSING_VAR");
        let input = "places = \"${CENSOR_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("CENSOR_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("CENSOR_LOADER_COMMENTED");
        let input = "# places = \"${CENSOR_LOADER_COMMENTED}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-censor.toml");
        assert!(matches!(result, Err(CensorError::Configuration(_))));
    }

    #[test]
    fn test_load_or_default_explicit_missing_file() {
        let result = load_or_default(Some(Path::new("/nonexistent/censor.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[output]
suffix = "masked"

[stats]
destination = "stdout"
format = "json"

[audit]
enabled = true
json_format = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.output.suffix, "masked");
        assert_eq!(config.output.subfolder, ".censored");
        assert_eq!(config.stats.destination, "stdout");
        assert!(config.audit.enabled);
        assert!(!config.audit.json_format);
    }

    #[test]
    fn test_load_config_invalid_value() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logging]\nlocal_rotation = \"weekly\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_load_config_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[stats\ndestination = ").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("parse TOML"));
    }
}
