//! Countdown state machine for a single timer session.
//!
//! Every method takes the current [`Instant`] explicitly so the caller owns
//! the clock. The async controller passes tokio's (pausable) clock through.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::protocol::TimerStatus;
use crate::{CoreError, SessionId};

/// Longest session accepted, one year.
pub const MAX_DURATION: Duration = Duration::from_secs(365 * 24 * 3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Counting down towards `deadline`.
    Running { deadline: Instant },
    /// Frozen with `remaining` left on the clock.
    Paused { remaining: Duration },
}

/// One countdown from start to expiry, stop, or nothing at all.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    duration: Duration,
    started_at: DateTime<Utc>,
    phase: Phase,
}

impl Session {
    /// Start a new running session of `duration` at `now`.
    ///
    /// # Errors
    /// Returns [`CoreError::ZeroDuration`] for an empty duration and
    /// [`CoreError::DurationTooLong`] above [`MAX_DURATION`].
    pub fn new(duration: Duration, now: Instant) -> Result<Self, CoreError> {
        if duration.is_zero() {
            return Err(CoreError::ZeroDuration);
        }
        if duration > MAX_DURATION {
            return Err(CoreError::DurationTooLong {
                secs: duration.as_secs(),
                max_secs: MAX_DURATION.as_secs(),
            });
        }
        Ok(Self {
            id: SessionId::new(),
            duration,
            started_at: Utc::now(),
            phase: Phase::Running { deadline: now + duration },
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Total length the session was started with.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused { .. })
    }

    /// Time left on the clock; saturates at zero once the deadline passes.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.phase {
            Phase::Running { deadline } => deadline.saturating_duration_since(now),
            Phase::Paused { remaining } => remaining,
        }
    }

    /// `true` once a running session has reached its deadline.
    ///
    /// A paused session never expires.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Running { deadline } => now >= deadline,
            Phase::Paused { .. } => false,
        }
    }

    /// The instant the session expires, or `None` while paused.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Running { deadline } => Some(deadline),
            Phase::Paused { .. } => None,
        }
    }

    /// Freeze the countdown.
    ///
    /// # Errors
    /// Returns [`CoreError::AlreadyPaused`] if the session is already paused.
    pub fn pause(&mut self, now: Instant) -> Result<(), CoreError> {
        match self.phase {
            Phase::Running { deadline } => {
                self.phase = Phase::Paused { remaining: deadline.saturating_duration_since(now) };
                Ok(())
            }
            Phase::Paused { .. } => Err(CoreError::AlreadyPaused),
        }
    }

    /// Continue counting down from where [`Session::pause`] left off.
    ///
    /// # Errors
    /// Returns [`CoreError::NotPaused`] if the session is running.
    pub fn resume(&mut self, now: Instant) -> Result<(), CoreError> {
        match self.phase {
            Phase::Paused { remaining } => {
                self.phase = Phase::Running { deadline: now + remaining };
                Ok(())
            }
            Phase::Running { .. } => Err(CoreError::NotPaused),
        }
    }

    /// Snapshot of the session for the wire.
    ///
    /// `remaining_secs` is rounded to the nearest whole second.
    #[must_use]
    pub fn status(&self, now: Instant) -> TimerStatus {
        TimerStatus {
            session_id: self.id,
            duration_secs: self.duration.as_secs(),
            remaining_secs: round_secs(self.remaining(now)),
            is_paused: self.is_paused(),
            started_at: self.started_at,
        }
    }
}

fn round_secs(duration: Duration) -> u64 {
    duration.saturating_add(Duration::from_millis(500)).as_secs()
}
