//! Spotlight CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use spotlight::cli::commands::{aggregate, cache, profile, serve, users};
use spotlight::cli::{Cli, Commands};
use spotlight::infrastructure::logging::{LogConfig, LoggerImpl};
use spotlight::{Config, ConfigLoader};

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => ConfigLoader::load().context("Failed to load configuration"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let log_config = LogConfig::try_from(&config.logging)?;
    let _logger = LoggerImpl::init(&log_config)?;

    match cli.command {
        Commands::Serve(args) => serve::execute(args, config).await,
        Commands::Users(args) => users::execute(args, cli.json, &config).await,
        Commands::Profile(args) => profile::execute(args, cli.json, &config).await,
        Commands::Aggregate(args) => aggregate::execute(args, cli.json, &config).await,
        Commands::Cache(args) => cache::execute(args, cli.json, &config).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        spotlight::cli::handle_error(err, json);
    }
}
