//! The daemon's `[pomodorod]` table of the shared config file.

use std::path::{Path, PathBuf};

use pomodoro_core::config::load_section;
use pomodoro_core::protocol::DEFAULT_SOCKET_PATH;
use pomodoro_core::CoreError;
use pomodoro_timer::HookConfig;
use serde::Deserialize;

/// Name of the table the daemon reads.
pub const TABLE: &str = "pomodorod";

/// Settings read from `[pomodorod]`.
///
/// ```toml
/// [pomodorod]
/// socket = "/run/user/1000/pomodoro.sock"
/// begin_cmd = "notify-send 'Focus time'"
/// done_cmd = ["paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"]
/// end_cmd = "notify-send 'Break'"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DaemonConfig {
    /// Control socket; `--socket` takes precedence.
    pub socket: Option<PathBuf>,
    #[serde(flatten)]
    pub hooks: HookConfig,
}

impl DaemonConfig {
    /// Load from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns [`CoreError::ConfigRead`] or [`CoreError::ConfigParse`].
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        load_section(path, TABLE)
    }

    /// Socket to listen on: `flag`, then the config value, then
    /// [`DEFAULT_SOCKET_PATH`].
    #[must_use]
    pub fn socket_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.socket.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
    }
}
