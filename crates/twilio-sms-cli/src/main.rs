mod cli;
mod commands;
mod config;
mod observability;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};
use output::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    if let Some(level) = &cli.log_level {
        config::validate_log_level(level)?;
    }
    let level = cli.log_level.as_deref().unwrap_or(&cfg.logging.level);
    observability::init_tracing_with_level(level);
    tracing::debug!(config = ?cfg.twilio, "Configuration loaded");

    match &cli.command {
        Commands::Send(args) => commands::send::send(&cfg, args).await?,
        Commands::Config(args) => match &args.command {
            ConfigCommands::Show { format } => commands::config::show(&cfg, *format)?,
            ConfigCommands::Check => commands::config::check(&cfg)?,
        },
    }

    Ok(())
}
