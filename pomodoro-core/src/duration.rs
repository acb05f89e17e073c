//! Human duration specs: `25m`, `1h30m`, `90s`.

use std::time::Duration;

use crate::CoreError;

const UNITS: [char; 3] = ['h', 'm', 's'];

fn unit_rank(unit: char) -> usize {
    UNITS.iter().position(|&u| u == unit).unwrap_or(usize::MAX)
}

fn unit_seconds(unit: char) -> u64 {
    match unit {
        'h' => 3600,
        'm' => 60,
        _ => 1,
    }
}

/// Parse a duration spec made of `<digits><unit>` groups.
///
/// Units must be one of `h`, `m`, `s` and appear from largest to smallest,
/// each at most once.
///
/// # Errors
/// Returns the matching [`CoreError`] variant for an empty spec, an unknown
/// character, a unit without an amount, trailing digits without a unit, units
/// out of order, or a total that overflows.
pub fn parse_duration(spec: &str) -> Result<Duration, CoreError> {
    if spec.is_empty() {
        return Err(CoreError::EmptyDuration);
    }

    let overflow = || CoreError::DurationOverflow { spec: spec.to_owned() };
    let mut digits = String::new();
    let mut largest: Option<char> = None;
    let mut total: u64 = 0;

    for token in spec.chars() {
        if token.is_ascii_digit() {
            digits.push(token);
            continue;
        }
        if !UNITS.contains(&token) {
            return Err(CoreError::UnknownUnit { got: token });
        }
        if let Some(largest) = largest {
            if unit_rank(token) <= unit_rank(largest) {
                return Err(CoreError::UnitOutOfOrder { largest, got: token });
            }
        }
        largest = Some(token);
        if digits.is_empty() {
            return Err(CoreError::MissingAmount { unit: token });
        }
        let amount: u64 = digits.parse().map_err(|_| overflow())?;
        digits.clear();
        let seconds = amount.checked_mul(unit_seconds(token)).ok_or_else(overflow)?;
        total = total.checked_add(seconds).ok_or_else(overflow)?;
    }

    if !digits.is_empty() {
        return Err(CoreError::MissingUnit { digits });
    }
    Ok(Duration::from_secs(total))
}

/// Render a duration as `1h05m00s`, `4m09s` or `7s`.
///
/// Sub-second precision is dropped.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h{minutes:02}m{seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
