//! The client's `[pomodoro]` table of the shared config file.

use std::path::{Path, PathBuf};

use pomodoro_core::config::load_section;
use pomodoro_core::protocol::DEFAULT_SOCKET_PATH;
use pomodoro_core::CoreError;
use serde::Deserialize;

/// Name of the table the client reads.
pub const TABLE: &str = "pomodoro";

/// Length of a session when neither `--duration` nor the config says otherwise.
pub const DEFAULT_DURATION: &str = "25m";

/// Settings read from `[pomodoro]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Duration spec used by `start` without `--duration`.
    pub default_duration: String,
    /// Control socket; `--socket` and `POMODORO_SOCKET` take precedence.
    pub socket: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { default_duration: DEFAULT_DURATION.to_owned(), socket: None }
    }
}

impl ClientConfig {
    /// Load from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns [`CoreError::ConfigRead`] or [`CoreError::ConfigParse`].
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        load_section(path, TABLE)
    }

    /// Socket to connect to. `flag` carries `--socket` or `POMODORO_SOCKET`
    /// and wins over the config value, which wins over [`DEFAULT_SOCKET_PATH`].
    #[must_use]
    pub fn socket_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.socket.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
    }
}
