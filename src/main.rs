mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use version_notifier::config::Config;
use version_notifier::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = observability::init_tracing("info");

    let cli = Cli::parse();

    let mut config = Config::load_unvalidated(cli.config.clone())?;
    match &cli.command {
        Commands::Check(args) => args.apply(&mut config),
        Commands::Watch(args) => args.apply(&mut config),
    }
    config.validate()?;

    if let Some(handle) = &filter {
        observability::set_default_filter(handle, &config.telemetry.log_filter)?;
    }

    match cli.command {
        Commands::Check(_) => commands::check(config).await?,
        Commands::Watch(_) => commands::watch(config).await?,
    }

    Ok(())
}
