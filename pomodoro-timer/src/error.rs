//! Error types for the timer crate.

use pomodoro_core::CoreError;

use crate::Hook;

/// Errors returned by [`crate::TimerController`] and hook runners.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TimerError {
    /// `start` while a session is running or paused.
    #[error("timer is already running")]
    AlreadyRunning,

    /// No session is active.
    #[error("timer is not running")]
    NotRunning,

    /// `pause` on a paused session.
    #[error("timer is already paused")]
    AlreadyPaused,

    /// `resume` on a running session.
    #[error("timer is not paused")]
    NotPaused,

    /// The requested session length was rejected.
    #[error("invalid duration: {0}")]
    InvalidDuration(#[source] CoreError),

    /// A lifecycle hook could not be launched.
    #[error("{hook} hook failed: {reason}")]
    HookFailed { hook: Hook, reason: String },
}
