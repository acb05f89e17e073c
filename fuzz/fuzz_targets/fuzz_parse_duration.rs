//! Fuzz target: duration spec parsing.
//!
//! Any accepted spec must render back to a spec that parses to the same
//! number of seconds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pomodoro_core::{format_duration, parse_duration};

fuzz_target!(|data: &[u8]| {
    let Ok(spec) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(duration) = parse_duration(spec) {
        let rendered = format_duration(duration);
        let back = parse_duration(&rendered).expect("rendered duration must parse");
        assert_eq!(back.as_secs(), duration.as_secs(), "{spec} -> {rendered}");
    }
});
