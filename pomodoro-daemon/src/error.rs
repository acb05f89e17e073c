//! Error types for the daemon crate.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pomodoro_core::{CoreError, ErrorBody, ErrorCode};
use pomodoro_timer::TimerError;

/// Errors that can occur while handling a control request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DaemonError {
    /// The timer refused the transition.
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// The request body is malformed or contains invalid values.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl DaemonError {
    /// The wire code a client sees for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            DaemonError::Timer(TimerError::AlreadyRunning) => ErrorCode::AlreadyRunning,
            DaemonError::Timer(TimerError::NotRunning) => ErrorCode::NotRunning,
            DaemonError::Timer(TimerError::AlreadyPaused) => ErrorCode::AlreadyPaused,
            DaemonError::Timer(TimerError::NotPaused) => ErrorCode::NotPaused,
            DaemonError::Timer(TimerError::InvalidDuration(_)) | DaemonError::InvalidRequest(_) => {
                ErrorCode::InvalidRequest
            }
            DaemonError::Timer(_) => ErrorCode::Internal,
        }
    }
}

impl IntoResponse for DaemonError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = match code {
            ErrorCode::AlreadyRunning
            | ErrorCode::NotRunning
            | ErrorCode::AlreadyPaused
            | ErrorCode::NotPaused => StatusCode::CONFLICT,
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorBody { code, error: self.to_string() })).into_response()
    }
}

/// Errors that stop the daemon from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StartupError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// Another process is already accepting connections on the socket.
    #[error("another daemon is already listening on {path}")]
    AlreadyListening { path: PathBuf },

    /// The socket path is taken by something that is not a socket.
    #[error("{path} exists and is not a socket")]
    NotASocket { path: PathBuf },

    /// The control socket could not be created.
    #[error("failed to bind {path}: {source}")]
    Bind {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying I/O error while serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_conflicts_map_to_409() {
        for err in [
            TimerError::AlreadyRunning,
            TimerError::NotRunning,
            TimerError::AlreadyPaused,
            TimerError::NotPaused,
        ] {
            let resp = DaemonError::Timer(err).into_response();
            assert_eq!(resp.status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn invalid_duration_maps_to_400() {
        let err = DaemonError::Timer(TimerError::InvalidDuration(CoreError::ZeroDuration));
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn hook_failure_maps_to_500() {
        let err = DaemonError::Timer(TimerError::HookFailed {
            hook: pomodoro_timer::Hook::Begin,
            reason: "no such file".to_owned(),
        });
        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_is_the_timer_message() {
        let err = DaemonError::Timer(TimerError::AlreadyRunning);
        assert_eq!(err.to_string(), "timer is already running");
    }
}
