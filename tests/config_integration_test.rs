//! Integration tests for configuration loading and validation
//!
//! Tests touching environment variables hold `ENV_MUTEX`.

use censor::config::{load_config, CensorConfig};
use censor::redaction::ReportFormat;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("CENSOR_APPLICATION_LOG_LEVEL");
    std::env::remove_var("CENSOR_OUTPUT_SUFFIX");
    std::env::remove_var("CENSOR_STATS_DESTINATION");
    std::env::remove_var("CENSOR_STATS_FORMAT");
    std::env::remove_var("CENSOR_AUDIT_ENABLED");
    std::env::remove_var("TEST_CENSOR_LIST_DIR");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let lists = tempfile::tempdir().unwrap();
    let names = lists.path().join("names.txt");
    let places = lists.path().join("places.txt");
    std::fs::write(&names, "Ada\n").unwrap();
    std::fs::write(&places, "Gotham\n").unwrap();

    let file = write_config(&format!(
        r#"
[application]
log_level = "warn"

[extraction]
given_names = "{}"
places = "{}"

[output]
subfolder = "redacted"
suffix = "txt"

[stats]
destination = "report.txt"
format = "json"

[logging]
local_enabled = false
local_rotation = "hourly"

[audit]
enabled = true
log_path = "./audit/run.log"
json_format = false
"#,
        names.display().to_string().replace('\\', "/"),
        places.display().to_string().replace('\\', "/"),
    ));

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.extraction.given_names.as_deref(), Some(names.as_path()));
    assert!(config.extraction.pattern_library.is_none());
    assert_eq!(config.output.subfolder, "redacted");
    assert_eq!(config.output.suffix, "txt");
    assert_eq!(config.stats.destination, "report.txt");
    assert_eq!(config.stats.format, ReportFormat::Json);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert!(config.audit.enabled);
    assert!(!config.audit.json_format);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let lists = tempfile::tempdir().unwrap();
    std::fs::write(lists.path().join("places.txt"), "Gotham\n").unwrap();
    std::env::set_var(
        "TEST_CENSOR_LIST_DIR",
        lists.path().display().to_string().replace('\\', "/"),
    );

    let file = write_config(
        r#"
[extraction]
places = "${TEST_CENSOR_LIST_DIR}/places.txt"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.extraction.places.unwrap(),
        lists.path().join("places.txt")
    );

    cleanup_env_vars();
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CENSOR_APPLICATION_LOG_LEVEL", "debug");
    std::env::set_var("CENSOR_OUTPUT_SUFFIX", "masked");
    std::env::set_var("CENSOR_STATS_FORMAT", "json");
    std::env::set_var("CENSOR_AUDIT_ENABLED", "true");

    let file = write_config(
        r#"
[application]
log_level = "error"

[output]
suffix = "censored"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.output.suffix, "masked");
    assert_eq!(config.stats.format, ReportFormat::Json);
    assert!(config.audit.enabled);

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CENSOR_STATS_FORMAT", "yaml");
    let file = write_config("");
    let result = load_config(file.path());
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_validation_rejects_bad_values() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    for content in [
        "[application]\nlog_level = \"loud\"\n",
        "[output]\nsuffix = \"\"\n",
        "[output]\nsubfolder = \"../escape\"\n",
        "[extraction]\npattern_library = \"/nonexistent/patterns.toml\"\n",
    ] {
        let file = write_config(content);
        let err = load_config(file.path()).unwrap_err();
        assert!(
            err.to_string().contains("validation failed"),
            "unexpected error for {content:?}: {err}"
        );
    }
}

#[test]
fn test_unknown_stats_format_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[stats]\nformat = \"xml\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("parse TOML"));
}

#[test]
fn test_default_config_serializes_back() {
    let config = CensorConfig::default();
    let rendered = toml::to_string(&config).unwrap();
    let parsed: CensorConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed.output.subfolder, config.output.subfolder);
    assert_eq!(parsed.stats.format, config.stats.format);
}
