//! Serving the control router on a Unix domain socket.

use std::future::Future;
use std::io::ErrorKind;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;
use std::sync::Arc;

use pomodoro_timer::{HookRunner, TimerController};
use tokio::net::UnixListener;

use crate::error::StartupError;
use crate::routes::create_router;

/// Clear a leftover socket file from a previous run.
///
/// # Errors
/// Returns [`StartupError::AlreadyListening`] if a live daemon still accepts
/// connections on `path`, [`StartupError::NotASocket`] if something other
/// than a socket sits there, and [`StartupError::Io`] if the file cannot be
/// inspected or removed.
pub fn remove_stale_socket(path: &Path) -> Result<(), StartupError> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    if !metadata.file_type().is_socket() {
        return Err(StartupError::NotASocket { path: path.to_owned() });
    }
    if std::os::unix::net::UnixStream::connect(path).is_ok() {
        return Err(StartupError::AlreadyListening { path: path.to_owned() });
    }
    tracing::debug!(socket = %path.display(), "removing stale socket");
    std::fs::remove_file(path)?;
    Ok(())
}

/// Bind `socket_path` and serve `timer` until `shutdown` resolves.
///
/// The socket file is removed once the server stops.
///
/// # Errors
/// Returns [`StartupError::AlreadyListening`] or [`StartupError::Bind`] if
/// the socket cannot be taken, and [`StartupError::Io`] if serving fails.
pub async fn serve<H, F>(
    socket_path: &Path,
    timer: Arc<TimerController<H>>,
    shutdown: F,
) -> Result<(), StartupError>
where
    H: HookRunner,
    F: Future<Output = ()> + Send + 'static,
{
    remove_stale_socket(socket_path)?;
    if let Some(parent) = socket_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let listener = UnixListener::bind(socket_path)
        .map_err(|source| StartupError::Bind { path: socket_path.to_owned(), source })?;
    tracing::info!(socket = %socket_path.display(), "pomodorod listening");

    let result = axum::serve(listener, create_router(timer))
        .with_graceful_shutdown(shutdown)
        .await;

    if let Err(e) = std::fs::remove_file(socket_path) {
        tracing::debug!(socket = %socket_path.display(), error = %e, "socket already gone");
    }
    tracing::info!("pomodorod stopped");
    result.map_err(StartupError::Io)
}
