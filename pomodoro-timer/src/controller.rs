//! Async controller owning the single active session.
//!
//! Each session gets a driver task that sleeps until the deadline and is woken
//! early whenever a request changes the session. The driver fires the `done`
//! and `end` hooks on expiry and clears the slot.

use std::sync::Arc;
use std::time::Duration;

use pomodoro_core::{CoreError, Session, SessionId, TimerStatus};
use tokio::sync::{Mutex, Notify};
use tokio::time::Instant;

use crate::{Hook, HookRunner, TimerError};

struct Active {
    session: Session,
    wake: Arc<Notify>,
}

type Slot = Arc<Mutex<Option<Active>>>;

fn now() -> std::time::Instant {
    Instant::now().into_std()
}

/// The slot's session, unless its deadline has already passed.
///
/// An expired session is still in the slot until its driver runs, but it is
/// no longer controllable.
fn live(slot: &mut Option<Active>, now: std::time::Instant) -> Option<&mut Active> {
    slot.as_mut().filter(|active| !active.session.is_expired(now))
}

/// Runs at most one pomodoro session at a time.
///
/// All operations are safe to call concurrently. Hooks fire while the slot
/// lock is held, so one session's hooks never interleave with another
/// request's.
pub struct TimerController<H: HookRunner> {
    hooks: Arc<H>,
    active: Slot,
}

impl<H: HookRunner> TimerController<H> {
    /// Create an idle controller firing hooks through `hooks`.
    #[must_use]
    pub fn new(hooks: H) -> Self {
        Self { hooks: Arc::new(hooks), active: Arc::new(Mutex::new(None)) }
    }

    /// Start a session of `duration`.
    ///
    /// # Errors
    /// Returns [`TimerError::AlreadyRunning`] if a session is active and
    /// [`TimerError::InvalidDuration`] for a zero or oversized duration.
    pub async fn start(&self, duration: Duration) -> Result<TimerStatus, TimerError> {
        let mut slot = self.active.lock().await;
        let now = now();
        if live(&mut slot, now).is_some() {
            return Err(TimerError::AlreadyRunning);
        }

        let session = Session::new(duration, now).map_err(TimerError::InvalidDuration)?;
        let status = session.status(now);
        let wake = Arc::new(Notify::new());
        // An expired session its driver has not collected yet; finish it here.
        if let Some(stale) = slot.replace(Active { session, wake: Arc::clone(&wake) }) {
            stale.wake.notify_one();
            complete(self.hooks.as_ref(), stale.session.id()).await;
        }

        tracing::info!(session = %status.session_id, secs = status.duration_secs, "session started");
        fire(self.hooks.as_ref(), Hook::Begin).await;
        drop(slot);

        tokio::spawn(drive(
            Arc::clone(&self.active),
            Arc::clone(&self.hooks),
            status.session_id,
            wake,
        ));
        Ok(status)
    }

    /// End the active session early. Fires `end` but not `done`.
    ///
    /// # Errors
    /// Returns [`TimerError::NotRunning`] if no session is active.
    pub async fn stop(&self) -> Result<TimerStatus, TimerError> {
        let mut slot = self.active.lock().await;
        let now = now();
        if live(&mut slot, now).is_none() {
            return Err(TimerError::NotRunning);
        }
        let Some(active) = slot.take() else {
            return Err(TimerError::NotRunning);
        };

        active.wake.notify_one();
        let status = active.session.status(now);
        tracing::info!(session = %status.session_id, remaining = status.remaining_secs, "session stopped");
        fire(self.hooks.as_ref(), Hook::End).await;
        Ok(status)
    }

    /// Freeze the countdown.
    ///
    /// # Errors
    /// Returns [`TimerError::NotRunning`] if no session is active and
    /// [`TimerError::AlreadyPaused`] if it is already paused.
    pub async fn pause(&self) -> Result<TimerStatus, TimerError> {
        let mut slot = self.active.lock().await;
        let now = now();
        let active = live(&mut slot, now).ok_or(TimerError::NotRunning)?;
        active.session.pause(now).map_err(|e| match e {
            CoreError::AlreadyPaused => TimerError::AlreadyPaused,
            other => TimerError::InvalidDuration(other),
        })?;
        active.wake.notify_one();

        let status = active.session.status(now);
        tracing::info!(session = %status.session_id, remaining = status.remaining_secs, "session paused");
        Ok(status)
    }

    /// Continue a paused countdown.
    ///
    /// # Errors
    /// Returns [`TimerError::NotRunning`] if no session is active and
    /// [`TimerError::NotPaused`] if it is running.
    pub async fn resume(&self) -> Result<TimerStatus, TimerError> {
        let mut slot = self.active.lock().await;
        let now = now();
        let active = live(&mut slot, now).ok_or(TimerError::NotRunning)?;
        active.session.resume(now).map_err(|e| match e {
            CoreError::NotPaused => TimerError::NotPaused,
            other => TimerError::InvalidDuration(other),
        })?;
        active.wake.notify_one();

        let status = active.session.status(now);
        tracing::info!(session = %status.session_id, remaining = status.remaining_secs, "session resumed");
        Ok(status)
    }

    /// Snapshot of the active session, `None` when idle.
    pub async fn status(&self) -> Option<TimerStatus> {
        let mut slot = self.active.lock().await;
        let now = now();
        live(&mut slot, now).map(|active| active.session.status(now))
    }
}

async fn fire<H: HookRunner>(hooks: &H, hook: Hook) {
    if let Err(e) = hooks.run(hook).await {
        tracing::warn!(%hook, error = %e, "hook failed");
    }
}

/// Fire the hooks of a session that ran to its deadline.
async fn complete<H: HookRunner>(hooks: &H, id: SessionId) {
    tracing::info!(session = %id, "session complete");
    fire(hooks, Hook::Done).await;
    fire(hooks, Hook::End).await;
}

/// Wait for `id` to expire, following pauses and resumes.
///
/// Returns without firing anything once the slot no longer holds `id`.
async fn drive<H: HookRunner>(slot: Slot, hooks: Arc<H>, id: SessionId, wake: Arc<Notify>) {
    loop {
        let deadline = {
            let mut guard = slot.lock().await;
            let Some(active) = guard.as_ref().filter(|a| a.session.id() == id) else {
                tracing::debug!(session = %id, "driver exiting, session gone");
                return;
            };
            let expired = active.session.is_expired(now());
            let deadline = active.session.deadline();
            if expired {
                *guard = None;
                complete(hooks.as_ref(), id).await;
                return;
            }
            deadline
        };

        match deadline {
            Some(deadline) => {
                tokio::select! {
                    () = tokio::time::sleep_until(Instant::from_std(deadline)) => {}
                    () = wake.notified() => {}
                }
            }
            None => wake.notified().await,
        }
    }
}
