//! Pomodoro timer daemon.
//!
//! Serves the timer control API as HTTP/1.1 over a Unix domain socket and
//! runs user hook commands as sessions begin and end.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
