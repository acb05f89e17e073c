//! Fuzz target: JSON deserialization of `StartRequest`.
//!
//! Arbitrary bytes sent to `POST /v1/timer/start` must never panic the
//! decoder; errors are expected and fine.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pomodoro_core::StartRequest;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<StartRequest>(data);
});
