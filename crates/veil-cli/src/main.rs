mod cli;
mod commands;
mod dataset;

use anyhow::Result;
use clap::Parser;
use veil_config::Config;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    match cli.command {
        cli::Commands::Show {
            viewer,
            decorate,
            data,
            json,
        } => commands::show::handle(&config, viewer, decorate, data, json),
        cli::Commands::Explain { viewer, subject } => commands::explain::handle(&viewer, &subject),
        cli::Commands::Roles { data } => commands::roles::handle(data),
    }
}
