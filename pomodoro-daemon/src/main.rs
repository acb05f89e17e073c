//! Entry point for the `pomodorod` daemon.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use pomodoro_core::config::default_config_path;
use pomodoro_daemon::config::DaemonConfig;
use pomodoro_daemon::error::StartupError;
use pomodoro_daemon::server::serve;
use pomodoro_timer::{ShellHooks, TimerController};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Pomodoro timer daemon.
#[derive(Parser, Debug)]
#[command(name = "pomodorod", version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Control socket (overrides the config file)
    #[arg(long, value_name = "PATH")]
    socket: Option<PathBuf>,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown requested");
}

async fn run(args: Args) -> Result<(), StartupError> {
    let config = match args.config.or_else(default_config_path) {
        Some(path) => DaemonConfig::load(&path)?,
        None => DaemonConfig::default(),
    };
    tracing::debug!(?config, "loaded config");

    let socket = config.socket_path(args.socket);
    let timer = Arc::new(TimerController::new(ShellHooks::new(config.hooks)));
    serve(&socket, timer, shutdown_signal()).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level.as_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::debug!(?args, "parsed arguments");

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "pomodorod failed");
        std::process::exit(1);
    }
}
