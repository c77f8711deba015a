//! Fuzz target for WOFF2 container parsing.
//!
//! Arbitrary bytes must never panic; they either parse or produce a
//! descriptive error.

#![no_main]

use emojitext::parse_woff2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match parse_woff2(data) {
        Ok(font) => {
            // A successful parse implies a full header and matching length.
            assert!(data.len() >= 48);
            assert!(data.starts_with(b"wOF2"));
            drop(font);
        }
        Err(err) => {
            let _ = err.to_string();
        }
    }
});
