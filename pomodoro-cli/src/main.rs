//! Entry point for the `pomodoro` client.

use std::process::ExitCode;

use clap::Parser;
use pomodoro_cli::cli::Args;
use pomodoro_cli::commands::execute;
use pomodoro_cli::config::ClientConfig;
use pomodoro_cli::{CliError, Client};
use pomodoro_core::config::default_config_path;
use tracing_subscriber::EnvFilter;

async fn run(args: Args) -> Result<String, CliError> {
    let config = match args.config.or_else(default_config_path) {
        Some(path) => ClientConfig::load(&path).map_err(CliError::Config)?,
        None => ClientConfig::default(),
    };

    let client = Client::new(config.socket_path(args.socket));
    tracing::debug!(socket = %client.socket_path().display(), "using daemon socket");

    execute(args.command.as_ref(), &config, &client).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
