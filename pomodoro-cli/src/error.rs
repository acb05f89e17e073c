//! Error types for the CLI crate.

use std::path::PathBuf;

use pomodoro_core::{CoreError, ErrorCode};

/// Errors talking to the daemon.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Nothing is listening on the socket.
    #[error("cannot reach pomodorod at {path} (is it running?): {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP exchange itself failed.
    #[error("request failed: {0}")]
    Http(String),

    /// The daemon understood the request and refused it.
    #[error("{message}")]
    Rejected { code: ErrorCode, message: String },

    /// A 2xx body did not match the expected shape.
    #[error("unexpected response from daemon: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced to the user by the `pomodoro` binary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CliError {
    /// The duration given with `--duration` or in the config is invalid.
    #[error("invalid duration '{spec}': {source}")]
    Duration {
        spec: String,
        #[source]
        source: CoreError,
    },

    /// The config file could not be loaded.
    #[error(transparent)]
    Config(CoreError),

    /// The daemon could not be reached or refused the command.
    #[error(transparent)]
    Client(#[from] ClientError),
}
