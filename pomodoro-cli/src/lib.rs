//! Command-line client for the pomodoro timer daemon.
//!
//! Parses duration specs locally, then drives `pomodorod` over its Unix
//! socket and prints a one-line summary of the result.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use client::Client;
pub use error::{CliError, ClientError};
