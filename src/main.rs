use clap::Parser;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;

mod cli;
mod commands;
mod config;
mod powers;

use cli::{Cli, Commands};
use config::{Config, LogLevel};

fn open_log_target(config: &Config) -> Result<(env_logger::Target, String)> {
    let log_file = config.log_file();

    if let Some(log_dir) = log_file.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    Ok((env_logger::Target::Pipe(target), log_file.display().to_string()))
}

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let from_env = std::env::var("RUST_LOG").is_ok();
    let level = if verbose && config.log_level.to_level_filter() < log::LevelFilter::Debug {
        LogLevel::Debug
    } else {
        config.log_level
    };

    if from_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(level.to_level_filter());
    }

    // stdout is reserved for command output
    let (target, destination, fallback) = match open_log_target(config) {
        Ok((target, path)) => (target, path, None),
        Err(e) => (env_logger::Target::Stderr, "stderr".to_string(), Some(e)),
    };

    builder.target(target).try_init().context("Failed to initialize logger")?;

    if let Some(e) = fallback {
        warn!("Could not open log file, logging to stderr: {:#}", e);
    }
    info!("Logging initialized, writing to: {}", destination);
    info!(
        "Log level: {} (from {})",
        level.as_filter(),
        if from_env { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo::run(),
        Commands::Describe { traits, format } => commands::describe::run(traits, cli::OutputFormat::resolve(format)),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config, cli.verbose).context("Failed to setup logging")?;

    info!("Starting superpowers with config from: {:?}", cli.config);

    run(cli).context("Command failed")?;

    Ok(())
}
