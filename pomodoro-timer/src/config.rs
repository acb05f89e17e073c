//! Lifecycle hook configuration.

use serde::Deserialize;

use crate::Hook;

/// A command to launch when a session changes state.
///
/// A plain string runs through `sh -c`; an array is executed directly as an
/// argv with no shell in between.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum HookCommand {
    /// `begin_cmd = "notify-send 'Focus'"`
    Shell(String),
    /// `begin_cmd = ["notify-send", "Focus"]`
    Argv(Vec<String>),
}

/// Commands run at each point of a session's life. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct HookConfig {
    /// Run when a session starts.
    pub begin_cmd: Option<HookCommand>,
    /// Run when a session counts all the way down. Not run on `stop`.
    pub done_cmd: Option<HookCommand>,
    /// Run whenever a session ends, after `done_cmd` on expiry.
    pub end_cmd: Option<HookCommand>,
}

impl HookConfig {
    /// Look up the command configured for `hook`.
    #[must_use]
    pub fn command(&self, hook: Hook) -> Option<&HookCommand> {
        match hook {
            Hook::Begin => self.begin_cmd.as_ref(),
            Hook::Done => self.done_cmd.as_ref(),
            Hook::End => self.end_cmd.as_ref(),
        }
    }
}
