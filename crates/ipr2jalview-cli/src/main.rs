//! ipr2jalview - Main entry point

#![deny(clippy::unwrap_used, clippy::expect_used)]

use clap::Parser;
use ipr2jalview_cli::{commands, Cli, Config};
use ipr2jalview_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Console logging: warnings by default, debug with --verbose
    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("ipr2jalview")
        .build();

    // Environment variables take precedence
    let log_config = match log_config.clone().with_env_overrides() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring logging environment: {e}");
            log_config
        },
    };

    // The CLI works without logging, so a failed setup is not fatal
    let log_guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute(&cli).await {
        error!(error = %e, "Conversion failed");
        eprintln!("Error: {e}");
        drop(log_guard);
        process::exit(1);
    }
}

async fn execute(cli: &Cli) -> ipr2jalview_cli::Result<()> {
    let config = Config::from_env()?.with_urls(cli.interpro_url.clone(), cli.uniprot_url.clone());
    config.validate()?;

    commands::convert::run(&config, &cli.convert_options()).await?;
    Ok(())
}
