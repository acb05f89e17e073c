//! HTTP client for the daemon's Unix domain socket.
//!
//! Standard HTTP clients don't speak Unix sockets, so each request opens a
//! `UnixStream` and runs a one-shot hyper HTTP/1 connection over it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode, Uri};
use hyper_util::rt::TokioIo;
use pomodoro_core::protocol::{
    HEALTH_PATH, PAUSE_PATH, RESUME_PATH, START_PATH, STATUS_PATH, STOP_PATH,
};
use pomodoro_core::{ErrorBody, StartRequest, StatusResponse, TimerStatus};
use serde::de::DeserializeOwned;
use tokio::net::UnixStream;

use crate::error::ClientError;

/// Send one HTTP request to the daemon socket.
///
/// The `uri_path` is the path component only (e.g. `/v1/timer`).
///
/// # Errors
/// Returns [`ClientError::Connect`] if the socket cannot be reached and
/// [`ClientError::Http`] on protocol errors.
async fn api_request(
    socket_path: &Path,
    method: Method,
    uri_path: &str,
    body: Option<String>,
) -> Result<(StatusCode, Bytes), ClientError> {
    let stream = UnixStream::connect(socket_path)
        .await
        .map_err(|source| ClientError::Connect { path: socket_path.to_owned(), source })?;

    let io = TokioIo::new(stream);

    let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
        .await
        .map_err(|e| ClientError::Http(format!("HTTP handshake: {e}")))?;

    // Drive the connection in the background.
    tokio::spawn(async move {
        if let Err(e) = conn.await {
            tracing::debug!("daemon connection closed: {e}");
        }
    });

    let body_bytes = body.map(Bytes::from).unwrap_or_default();
    let content_len = body_bytes.len();

    let uri: Uri = uri_path
        .parse()
        .map_err(|e| ClientError::Http(format!("invalid URI path {uri_path}: {e}")))?;

    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Host", "localhost");

    if content_len > 0 {
        builder = builder.header("Content-Type", "application/json");
        builder = builder.header("Content-Length", content_len.to_string());
    }

    let req = builder
        .body(Full::new(body_bytes))
        .map_err(|e| ClientError::Http(format!("build request: {e}")))?;

    let resp = sender
        .send_request(req)
        .await
        .map_err(|e| ClientError::Http(format!("send request: {e}")))?;

    let status = resp.status();
    let body_bytes = resp
        .into_body()
        .collect()
        .await
        .map_err(|e| ClientError::Http(format!("read response body: {e}")))?
        .to_bytes();

    tracing::debug!(%status, uri_path, bytes = body_bytes.len(), "daemon responded");
    Ok((status, body_bytes))
}

/// Turn a daemon response into `T` or the refusal it carries.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ClientError> {
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) => Err(ClientError::Rejected { code: err.code, message: err.error }),
        Err(_) => Err(ClientError::Http(format!(
            "HTTP {status}: {}",
            String::from_utf8_lossy(body)
        ))),
    }
}

/// Typed handle on a daemon socket.
#[derive(Debug, Clone)]
pub struct Client {
    socket_path: PathBuf,
}

impl Client {
    #[must_use]
    pub fn new(socket_path: PathBuf) -> Self {
        Self { socket_path }
    }

    #[must_use]
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ClientError> {
        let (status, bytes) = api_request(&self.socket_path, method, path, body).await?;
        decode_response(status, &bytes)
    }

    /// Start a session of `duration`, rounded down to whole seconds.
    ///
    /// # Errors
    /// Returns [`ClientError::Rejected`] if a session is already active.
    pub async fn start(&self, duration: Duration) -> Result<TimerStatus, ClientError> {
        let body = serde_json::to_string(&StartRequest { duration_secs: duration.as_secs() })?;
        self.call(Method::POST, START_PATH, Some(body)).await
    }

    /// # Errors
    /// Returns [`ClientError::Rejected`] if no session is active.
    pub async fn stop(&self) -> Result<TimerStatus, ClientError> {
        self.call(Method::POST, STOP_PATH, None).await
    }

    /// # Errors
    /// Returns [`ClientError::Rejected`] if idle or already paused.
    pub async fn pause(&self) -> Result<TimerStatus, ClientError> {
        self.call(Method::POST, PAUSE_PATH, None).await
    }

    /// # Errors
    /// Returns [`ClientError::Rejected`] if idle or not paused.
    pub async fn resume(&self) -> Result<TimerStatus, ClientError> {
        self.call(Method::POST, RESUME_PATH, None).await
    }

    /// The active session, `None` when the daemon is idle.
    ///
    /// # Errors
    /// Returns [`ClientError::Connect`] if the daemon is unreachable.
    pub async fn status(&self) -> Result<Option<TimerStatus>, ClientError> {
        let resp: StatusResponse = self.call(Method::GET, STATUS_PATH, None).await?;
        Ok(resp.status)
    }

    /// # Errors
    /// Returns [`ClientError::Connect`] if the daemon is unreachable.
    pub async fn health(&self) -> Result<(), ClientError> {
        let _: serde_json::Value = self.call(Method::GET, HEALTH_PATH, None).await?;
        Ok(())
    }
}
