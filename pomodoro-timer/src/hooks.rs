//! Lifecycle hooks fired by the timer controller.
//!
//! The controller only knows about [`HookRunner`]; the daemon plugs in
//! [`ShellHooks`], tests plug in a recorder.

use std::fmt;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::{HookCommand, HookConfig};
use crate::TimerError;

/// The points in a session's life at which a hook fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// A session was started.
    Begin,
    /// A session counted down to zero.
    Done,
    /// A session ended, by expiry or by `stop`.
    End,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Hook::Begin => "begin",
            Hook::Done => "done",
            Hook::End => "end",
        })
    }
}

/// Runs the side effects attached to session transitions.
///
/// Implementations must return promptly: the controller awaits `run` on the
/// request path, so long-running work belongs in a background task.
#[async_trait]
pub trait HookRunner: Send + Sync + 'static {
    /// Fire `hook`.
    ///
    /// # Errors
    /// Returns [`TimerError::HookFailed`] if the hook could not be launched.
    async fn run(&self, hook: Hook) -> Result<(), TimerError>;
}

/// Launches the configured commands as detached child processes.
///
/// Children are never waited on by the caller; a background task reaps each
/// one and logs a non-zero exit.
#[derive(Debug, Clone, Default)]
pub struct ShellHooks {
    config: HookConfig,
}

impl ShellHooks {
    #[must_use]
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }

    fn build(hook: Hook, command: &HookCommand) -> Result<Command, TimerError> {
        let mut cmd = match command {
            HookCommand::Shell(line) => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(line);
                cmd
            }
            HookCommand::Argv(argv) => {
                let (program, args) = argv.split_first().ok_or_else(|| TimerError::HookFailed {
                    hook,
                    reason: "empty command".to_owned(),
                })?;
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        };
        cmd.stdin(Stdio::null());
        Ok(cmd)
    }
}

#[async_trait]
impl HookRunner for ShellHooks {
    async fn run(&self, hook: Hook) -> Result<(), TimerError> {
        let Some(command) = self.config.command(hook) else {
            return Ok(());
        };

        let mut child = Self::build(hook, command)?
            .spawn()
            .map_err(|e| TimerError::HookFailed { hook, reason: e.to_string() })?;

        tracing::debug!(%hook, pid = ?child.id(), "hook launched");

        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    tracing::debug!(%hook, "hook exited cleanly");
                }
                Ok(status) => tracing::warn!(%hook, %status, "hook exited with failure"),
                Err(e) => tracing::warn!(%hook, error = %e, "failed to wait for hook"),
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use super::*;

    async fn wait_for_file(path: &Path) -> bool {
        for _ in 0..50u8 {
            if path.exists() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        false
    }

    fn tempdir() -> tempfile::TempDir {
        match tempfile::tempdir() {
            Ok(d) => d,
            Err(e) => panic!("tempdir: {e}"),
        }
    }

    #[test]
    fn hook_display_is_lowercase() {
        assert_eq!(Hook::Begin.to_string(), "begin");
        assert_eq!(Hook::Done.to_string(), "done");
        assert_eq!(Hook::End.to_string(), "end");
    }

    #[tokio::test]
    async fn unset_hook_is_a_no_op() {
        let hooks = ShellHooks::default();
        assert!(hooks.run(Hook::Begin).await.is_ok());
    }

    #[tokio::test]
    async fn shell_hook_runs_through_sh() {
        let dir = tempdir();
        let marker = dir.path().join("began");
        let hooks = ShellHooks::new(HookConfig {
            begin_cmd: Some(HookCommand::Shell(format!("touch '{}'", marker.display()))),
            ..HookConfig::default()
        });

        assert!(hooks.run(Hook::Begin).await.is_ok());
        assert!(wait_for_file(&marker).await, "begin hook must create {}", marker.display());
    }

    #[tokio::test]
    async fn argv_hook_runs_without_shell() {
        let dir = tempdir();
        let marker = dir.path().join("it's done");
        let hooks = ShellHooks::new(HookConfig {
            done_cmd: Some(HookCommand::Argv(vec![
                "touch".to_owned(),
                marker.display().to_string(),
            ])),
            ..HookConfig::default()
        });

        assert!(hooks.run(Hook::Done).await.is_ok());
        assert!(wait_for_file(&marker).await, "argv is passed verbatim, quotes included");
    }

    #[tokio::test]
    async fn empty_argv_is_rejected() {
        let hooks = ShellHooks::new(HookConfig {
            end_cmd: Some(HookCommand::Argv(Vec::new())),
            ..HookConfig::default()
        });
        let result = hooks.run(Hook::End).await;
        assert!(
            matches!(result, Err(TimerError::HookFailed { hook: Hook::End, .. })),
            "empty argv must fail, got {result:?}"
        );
    }

    #[tokio::test]
    async fn missing_program_reports_spawn_failure() {
        let hooks = ShellHooks::new(HookConfig {
            begin_cmd: Some(HookCommand::Argv(vec!["/nonexistent/pomodoro-hook".to_owned()])),
            ..HookConfig::default()
        });
        assert!(matches!(hooks.run(Hook::Begin).await, Err(TimerError::HookFailed { .. })));
    }
}
