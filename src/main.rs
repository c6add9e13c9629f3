//! certcache CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use certcache::cli::{commands, Cli, Commands};
use certcache::domain::models::Config;
use certcache::infrastructure::config::ConfigLoader;
use certcache::infrastructure::logging::{LogSettings, LoggerImpl};

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(ref url) = cli.database {
        config.database.url.clone_from(url);
        ConfigLoader::validate(&config)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => certcache::cli::handle_error(err, cli.json),
    };

    let _logger = match LogSettings::try_from(&config.logging)
        .map_err(anyhow::Error::msg)
        .and_then(|settings| LoggerImpl::init(&settings))
        .context("Failed to initialize logging")
    {
        Ok(logger) => logger,
        Err(err) => certcache::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(&config, cli.json).await,
        Commands::Get(args) => commands::get::execute(args, &config, cli.json).await,
        Commands::Put(args) => commands::put::execute(args, &config, cli.json).await,
        Commands::Delete(args) => commands::delete::execute(args, &config, cli.json).await,
    };

    if let Err(err) = result {
        certcache::cli::handle_error(err, cli.json);
    }
}
