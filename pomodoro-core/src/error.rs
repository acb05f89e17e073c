use std::path::PathBuf;

/// Errors produced by the `pomodoro-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A duration spec was empty.
    #[error("expected a duration such as '25m' or '1h30m', got an empty string")]
    EmptyDuration,

    /// A unit appeared after a unit of the same or smaller size.
    #[error("expected unit smaller than '{largest}', got '{got}'")]
    UnitOutOfOrder { largest: char, got: char },

    /// A unit appeared without any digits in front of it.
    #[error("expected duration for unit '{unit}'")]
    MissingAmount { unit: char },

    /// Digits were left over at the end of the spec.
    #[error("expected unit for duration '{digits}'")]
    MissingUnit { digits: String },

    /// A character that is neither a digit nor a known unit.
    #[error("expected unit to be one of h, m, s, got '{got}'")]
    UnknownUnit { got: char },

    /// The total number of seconds does not fit in a `u64`.
    #[error("duration '{spec}' is too large")]
    DurationOverflow { spec: String },

    /// A session cannot be started with a zero length.
    #[error("duration must be longer than zero")]
    ZeroDuration,

    /// A session longer than [`crate::session::MAX_DURATION`].
    #[error("duration of {secs}s exceeds the maximum of {max_secs}s")]
    DurationTooLong { secs: u64, max_secs: u64 },

    /// The session is already paused.
    #[error("timer is already paused")]
    AlreadyPaused,

    /// The session is running, so there is nothing to resume.
    #[error("timer is not paused")]
    NotPaused,

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("invalid config {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },
}
