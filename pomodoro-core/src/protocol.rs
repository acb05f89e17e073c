//! JSON bodies exchanged between `pomodoro` and `pomodorod`.
//!
//! The daemon speaks HTTP/1.1 over a Unix domain socket. Paths live here so
//! the router and the client cannot drift apart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SessionId;

/// Default location of the daemon's control socket.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/pomodoro.sock";

pub const START_PATH: &str = "/v1/timer/start";
pub const STOP_PATH: &str = "/v1/timer/stop";
pub const PAUSE_PATH: &str = "/v1/timer/pause";
pub const RESUME_PATH: &str = "/v1/timer/resume";
pub const STATUS_PATH: &str = "/v1/timer";
pub const HEALTH_PATH: &str = "/health";

/// Body of `POST /v1/timer/start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub duration_secs: u64,
}

/// Point-in-time view of the active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStatus {
    pub session_id: SessionId,
    /// Length the session was started with.
    pub duration_secs: u64,
    /// Seconds left, rounded to the nearest second.
    pub remaining_secs: u64,
    pub is_paused: bool,
    /// Wall-clock time the session was started.
    pub started_at: DateTime<Utc>,
}

/// Body of `GET /v1/timer`. `status` is `None` when no session is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Option<TimerStatus>,
}

/// Machine-readable reason a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// `start` while a session is active.
    AlreadyRunning,
    /// `stop`, `pause` or `resume` with no active session.
    NotRunning,
    /// `pause` on a paused session.
    AlreadyPaused,
    /// `resume` on a running session.
    NotPaused,
    /// Malformed body or out-of-range value.
    InvalidRequest,
    /// Anything else.
    Internal,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub error: String,
}
