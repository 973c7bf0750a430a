// Censor - Sensitive Entity Redaction Tool
// Copyright (c) 2025 Censor Contributors
// Licensed under the MIT License

use censor::cli::{Cli, Commands};
use censor::config::{load_or_default, CensorConfig};
use censor::domain::Result;
use censor::logging::init_logging;
use clap::Parser;
use std::process;
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    // Optional; a missing .env file is ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let loaded = load_or_default(cli.config.as_deref());

    // A broken config still gets console logging so the error can be reported.
    let defaults = CensorConfig::default();
    let settings = loaded.as_ref().unwrap_or(&defaults);
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&settings.application.log_level);

    let guard = match init_logging(log_level, &settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Censor - Sensitive Entity Redaction Tool"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create SIGTERM handler");
                    return;
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received SIGINT (Ctrl+C), initiating graceful shutdown...");
                    eprintln!("\n⚠️  Shutdown signal received, finishing current file...");
                    let _ = shutdown_tx.send(true);
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown...");
                    eprintln!("\n⚠️  Shutdown signal received, finishing current file...");
                    let _ = shutdown_tx.send(true);
                }
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            } else {
                tracing::info!("Received SIGINT (Ctrl+C), initiating graceful shutdown...");
                eprintln!("\n⚠️  Shutdown signal received, finishing current file...");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let exit_code = match execute_command(&cli, loaded, shutdown_rx).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // process::exit skips destructors; flush file logs first.
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    loaded: Result<CensorConfig>,
    shutdown_signal: watch::Receiver<bool>,
) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Redact(args) => match loaded {
            Ok(config) => args.execute(&config, shutdown_signal).await,
            Err(e) => {
                censor::log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("❌ {e}");
                Ok(2)
            }
        },
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()).await,
        Commands::Init(args) => args.execute().await,
    }
}
