#![no_main]

use libfuzzer_sys::fuzz_target;
use tonal::interval::{expand_name, parse_interval};
use tonal::note::parse_note;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(note) = parse_note(text) {
        let reparsed = parse_note(&note.name()).expect("note names must reparse");
        assert!(reparsed.is_enharmonic(&note));
    }

    if let Ok(interval) = parse_interval(text) {
        let _ = interval.semitones();
        let _ = expand_name(text);
        parse_interval(&interval.name()).expect("interval names must reparse");
    }
});
