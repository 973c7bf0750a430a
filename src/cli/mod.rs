//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for censor using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// censor - mask names, dates, addresses and phone numbers in text files
#[derive(Parser, Debug)]
#[command(name = "censor")]
#[command(version, about, long_about = None)]
#[command(author = "Censor Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./censor.toml when present)
    #[arg(short, long, env = "CENSOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CENSOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask sensitive entities in the matched files
    Redact(commands::redact::RedactArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
