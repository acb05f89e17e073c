//! One-line summaries printed by the `pomodoro` binary.

use std::time::Duration;

use chrono::{Local, TimeDelta};
use pomodoro_core::{format_duration, TimerStatus};

fn remaining(status: &TimerStatus) -> String {
    format_duration(Duration::from_secs(status.remaining_secs))
}

fn total(status: &TimerStatus) -> String {
    format_duration(Duration::from_secs(status.duration_secs))
}

/// `Started a 25m00s session, ends at 14:35`
#[must_use]
pub fn started(status: &TimerStatus) -> String {
    let ends_at = i64::try_from(status.remaining_secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|left| Local::now().checked_add_signed(left));
    match ends_at {
        Some(at) => format!("Started a {} session, ends at {}", total(status), at.format("%H:%M")),
        None => format!("Started a {} session", total(status)),
    }
}

/// `Stopped with 12m03s remaining`
#[must_use]
pub fn stopped(status: &TimerStatus) -> String {
    format!("Stopped with {} remaining", remaining(status))
}

/// `Paused with 12m03s remaining`
#[must_use]
pub fn paused(status: &TimerStatus) -> String {
    format!("Paused with {} remaining", remaining(status))
}

/// `Resumed with 12m03s remaining`
#[must_use]
pub fn resumed(status: &TimerStatus) -> String {
    format!("Resumed with {} remaining", remaining(status))
}

/// `Running: 12m03s of 25m00s remaining`, or `No timer running`.
#[must_use]
pub fn status(status: Option<&TimerStatus>) -> String {
    match status {
        None => "No timer running".to_owned(),
        Some(s) => {
            let state = if s.is_paused { "Paused" } else { "Running" };
            format!("{state}: {} of {} remaining", remaining(s), total(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pomodoro_core::SessionId;

    use super::*;

    fn sample(remaining_secs: u64, is_paused: bool) -> TimerStatus {
        TimerStatus {
            session_id: SessionId::new(),
            duration_secs: 1500,
            remaining_secs,
            is_paused,
            started_at: Utc::now(),
        }
    }

    #[test]
    fn status_lines() {
        assert_eq!(status(None), "No timer running");
        assert_eq!(status(Some(&sample(723, false))), "Running: 12m03s of 25m00s remaining");
        assert_eq!(status(Some(&sample(59, true))), "Paused: 59s of 25m00s remaining");
    }

    #[test]
    fn transition_lines() {
        assert_eq!(stopped(&sample(723, false)), "Stopped with 12m03s remaining");
        assert_eq!(paused(&sample(723, true)), "Paused with 12m03s remaining");
        assert_eq!(resumed(&sample(60, false)), "Resumed with 1m00s remaining");
    }

    #[test]
    fn started_line_names_length_and_end() {
        let line = started(&sample(1500, false));
        assert!(line.starts_with("Started a 25m00s session, ends at "), "got {line}");
    }
}
