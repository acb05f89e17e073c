//! Axum route handlers for the timer control API.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use pomodoro_core::protocol::{
    HEALTH_PATH, PAUSE_PATH, RESUME_PATH, START_PATH, STATUS_PATH, STOP_PATH,
};
use pomodoro_core::{StartRequest, StatusResponse};
use pomodoro_timer::{HookRunner, TimerController};
use tower_http::trace::TraceLayer;

use crate::error::DaemonError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Timer<H> = Arc<TimerController<H>>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the control router around the given timer.
pub fn create_router<H: HookRunner>(timer: Timer<H>) -> Router {
    Router::new()
        .route(START_PATH, post(start_timer::<H>))
        .route(STOP_PATH, post(stop_timer::<H>))
        .route(PAUSE_PATH, post(pause_timer::<H>))
        .route(RESUME_PATH, post(resume_timer::<H>))
        .route(STATUS_PATH, get(timer_status::<H>))
        .route(HEALTH_PATH, get(health))
        .with_state(timer)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /v1/timer/start`: begin a session of `duration_secs`.
///
/// # Errors
/// Returns [`DaemonError::InvalidRequest`] for a malformed body and
/// [`DaemonError::Timer`] if a session is already active or the duration is
/// rejected.
pub async fn start_timer<H: HookRunner>(
    State(timer): State<Timer<H>>,
    body: Result<Json<StartRequest>, JsonRejection>,
) -> Result<impl IntoResponse, DaemonError> {
    let Json(body) = body.map_err(|e| DaemonError::InvalidRequest(e.body_text()))?;
    tracing::debug!(duration_secs = body.duration_secs, "start requested");
    let status = timer.start(Duration::from_secs(body.duration_secs)).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// `POST /v1/timer/stop`: end the active session without firing `done`.
///
/// # Errors
/// Returns [`DaemonError::Timer`] if no session is active.
pub async fn stop_timer<H: HookRunner>(
    State(timer): State<Timer<H>>,
) -> Result<impl IntoResponse, DaemonError> {
    Ok(Json(timer.stop().await?))
}

/// `POST /v1/timer/pause`: freeze the countdown.
///
/// # Errors
/// Returns [`DaemonError::Timer`] if idle or already paused.
pub async fn pause_timer<H: HookRunner>(
    State(timer): State<Timer<H>>,
) -> Result<impl IntoResponse, DaemonError> {
    Ok(Json(timer.pause().await?))
}

/// `POST /v1/timer/resume`: continue a paused countdown.
///
/// # Errors
/// Returns [`DaemonError::Timer`] if idle or not paused.
pub async fn resume_timer<H: HookRunner>(
    State(timer): State<Timer<H>>,
) -> Result<impl IntoResponse, DaemonError> {
    Ok(Json(timer.resume().await?))
}

/// `GET /v1/timer`: the active session, or `null` when idle.
pub async fn timer_status<H: HookRunner>(State(timer): State<Timer<H>>) -> impl IntoResponse {
    Json(StatusResponse { status: timer.status().await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use pomodoro_core::{ErrorBody, ErrorCode, TimerStatus};
    use pomodoro_timer::{Hook, TimerError};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    struct NoHooks;

    #[async_trait]
    impl HookRunner for NoHooks {
        async fn run(&self, _hook: Hook) -> Result<(), TimerError> {
            Ok(())
        }
    }

    fn test_router() -> Router {
        create_router(Arc::new(TimerController::new(NoHooks)))
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let req = match builder.body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned()))) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.clone().oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        (status, bytes.to_vec())
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> T {
        match serde_json::from_slice(bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON {}: {e}", String::from_utf8_lossy(bytes)),
        }
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let app = test_router();
        let (status, bytes) = call(&app, Method::GET, HEALTH_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = decode(&bytes);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn idle_status_is_null() {
        let app = test_router();
        let (status, bytes) = call(&app, Method::GET, STATUS_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        let body: StatusResponse = decode(&bytes);
        assert_eq!(body.status, None);
    }

    #[tokio::test]
    async fn start_returns_created_with_session() {
        let app = test_router();
        let (status, bytes) =
            call(&app, Method::POST, START_PATH, Some(r#"{"duration_secs":1500}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let started: TimerStatus = decode(&bytes);
        assert_eq!(started.duration_secs, 1500);
        assert!(!started.is_paused);

        let (_, bytes) = call(&app, Method::GET, STATUS_PATH, None).await;
        let body: StatusResponse = decode(&bytes);
        assert_eq!(body.status.map(|s| s.session_id), Some(started.session_id));
    }

    #[tokio::test]
    async fn second_start_conflicts_with_already_running() {
        let app = test_router();
        let body = Some(r#"{"duration_secs":60}"#);
        let (first, _) = call(&app, Method::POST, START_PATH, body).await;
        assert_eq!(first, StatusCode::CREATED);

        let (status, bytes) = call(&app, Method::POST, START_PATH, body).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let err: ErrorBody = decode(&bytes);
        assert_eq!(err.code, ErrorCode::AlreadyRunning);
    }

    #[tokio::test]
    async fn control_verbs_on_idle_timer_report_not_running() {
        let app = test_router();
        for path in [STOP_PATH, PAUSE_PATH, RESUME_PATH] {
            let (status, bytes) = call(&app, Method::POST, path, None).await;
            assert_eq!(status, StatusCode::CONFLICT, "{path}");
            let err: ErrorBody = decode(&bytes);
            assert_eq!(err.code, ErrorCode::NotRunning, "{path}");
        }
    }

    #[tokio::test]
    async fn pause_resume_stop_cycle() {
        let app = test_router();
        let _ = call(&app, Method::POST, START_PATH, Some(r#"{"duration_secs":600}"#)).await;

        let (status, bytes) = call(&app, Method::POST, PAUSE_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(decode::<TimerStatus>(&bytes).is_paused);

        let (status, bytes) = call(&app, Method::POST, PAUSE_PATH, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(decode::<ErrorBody>(&bytes).code, ErrorCode::AlreadyPaused);

        let (status, bytes) = call(&app, Method::POST, RESUME_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!decode::<TimerStatus>(&bytes).is_paused);

        let (status, bytes) = call(&app, Method::POST, RESUME_PATH, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(decode::<ErrorBody>(&bytes).code, ErrorCode::NotPaused);

        let (status, _) = call(&app, Method::POST, STOP_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, bytes) = call(&app, Method::GET, STATUS_PATH, None).await;
        assert_eq!(decode::<StatusResponse>(&bytes).status, None);
    }

    #[tokio::test]
    async fn malformed_start_body_is_invalid_request() {
        let app = test_router();
        for body in [r#"{"duration_secs":"soon"}"#, "not json", r#"{"duration_secs":-5}"#] {
            let (status, bytes) = call(&app, Method::POST, START_PATH, Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(decode::<ErrorBody>(&bytes).code, ErrorCode::InvalidRequest, "{body}");
        }
    }

    #[tokio::test]
    async fn zero_duration_is_invalid_request() {
        let app = test_router();
        let (status, bytes) =
            call(&app, Method::POST, START_PATH, Some(r#"{"duration_secs":0}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ErrorBody = decode(&bytes);
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert!(err.error.contains("zero"), "message should explain: {}", err.error);
    }
}
