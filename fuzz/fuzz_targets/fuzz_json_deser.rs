#![no_main]

use libfuzzer_sys::fuzz_target;
use tonal::{Scale, Tuning};

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<Scale>(data);
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Tuning::from_json(text);
    }
});
