//! Command-line arguments for `pomodoro`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Control the pomodoro timer daemon.
#[derive(Parser, Debug)]
#[command(name = "pomodoro", version, about, long_about = None)]
pub struct Args {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Daemon control socket
    #[arg(long, value_name = "PATH", env = "POMODORO_SOCKET", global = true)]
    pub socket: Option<PathBuf>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `status`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a session
    Start {
        /// Session length such as `25m` or `1h30m` (defaults to the config)
        #[arg(short, long, value_name = "SPEC")]
        duration: Option<String>,
    },
    /// Stop the session early
    Stop,
    /// Pause the countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Show the active session
    Status,
}
