//! Fuzz target: client-side decoding of daemon replies.
//!
//! Covers the status body and the error body the client falls back to.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pomodoro_core::{ErrorBody, StatusResponse};

fuzz_target!(|data: &[u8]| {
    if let Ok(resp) = serde_json::from_slice::<StatusResponse>(data) {
        let json = serde_json::to_vec(&resp).expect("StatusResponse serialization must not fail");
        let again: StatusResponse =
            serde_json::from_slice(&json).expect("re-encoded StatusResponse must decode");
        assert_eq!(resp, again);
    }
    let _ = serde_json::from_slice::<ErrorBody>(data);
});
