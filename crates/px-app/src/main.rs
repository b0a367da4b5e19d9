use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use px_core::config::{PipelineConfig, load_config};

pub mod cli;
pub mod pipeline;

fn main() -> Result<ExitCode> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Config
    let config = resolve_config(&cli)?;

    // 4. Exécution des étapes puis rapport
    let report = pipeline::run(&config);
    for (stage, path) in &report.saved {
        if let Some(message) = stage.success_message() {
            println!("{message}: {}", path.display());
        }
    }
    for failure in &report.failures {
        eprintln!("{failure}");
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Charge `--config` s'il existe, sinon les chemins par défaut.
fn resolve_config(cli: &cli::Cli) -> Result<PipelineConfig> {
    if cli.config.exists() {
        load_config(&cli.config)
    } else {
        log::warn!(
            "Config not found: {}. Using defaults.",
            cli.config.display()
        );
        Ok(PipelineConfig::default())
    }
}
