//! Core types for the pomodoro timer.
//!
//! Defines duration specs, the session state machine, the wire types shared
//! by the daemon and its client, and the shared configuration file.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod duration;
pub mod error;
pub mod id;
pub mod protocol;
pub mod session;

pub use duration::{format_duration, parse_duration};
pub use error::CoreError;
pub use id::SessionId;
pub use protocol::{ErrorBody, ErrorCode, StartRequest, StatusResponse, TimerStatus};
pub use session::Session;
