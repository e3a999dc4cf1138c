//! Sentinel API Server Entry Point

use clap::Parser;
use sentinel_api::cli::{Cli, Commands};
use sentinel_api::config::ServerConfig;
use sentinel_api::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init()?;

    let config = match cli.command {
        Some(Commands::Serve(args)) => args.apply(ServerConfig::from_env()),
        // No subcommand - default to serve
        None => ServerConfig::from_env(),
    };

    sentinel_api::cli::serve::execute(config).await
}
