//! Countdown control for the pomodoro daemon.
//!
//! Owns the single active session, drives it to expiry on the tokio clock,
//! and fires user-configured hook commands at begin, done, and end.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod controller;
pub mod error;
pub mod hooks;

pub use config::{HookCommand, HookConfig};
pub use controller::TimerController;
pub use error::TimerError;
pub use hooks::{Hook, HookRunner, ShellHooks};
