//! Property-based tests for notation parsing and interval arithmetic.
//!
//! These tests verify that parsers never panic on arbitrary input and that
//! naming, transposition and stacking keep their chromatic invariants, and
//! that JSON keeps every note and interval exactly.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tonal --test notation_properties
//! ```

use proptest::prelude::*;

use tonal::interval::{
    between, circle, default_quality, parse_interval, sum, Interval, Quality, MAX_CIRCLE_STEPS,
};
use tonal::note::{parse_note, transpose, Note};

// ============================================================================
// 1. Parser robustness
// ============================================================================

proptest! {
    /// Arbitrary strings never panic the note parser.
    #[test]
    fn note_parser_never_panics(s in "\\PC{0,12}") {
        let _ = parse_note(&s);
    }

    /// Arbitrary strings never panic the interval parser.
    #[test]
    fn interval_parser_never_panics(s in "[0-9mDPMAx#b]{0,12}") {
        let _ = parse_interval(&s);
    }

    /// Any letter followed by accidentals parses.
    #[test]
    fn well_formed_notes_parse(notation in "[A-G][#b]{0,6}") {
        prop_assert!(parse_note(&notation).is_ok());
    }
}

// ============================================================================
// 2. Naming invariants
// ============================================================================

proptest! {
    /// Renaming and reparsing keeps the chromatic class.
    #[test]
    fn name_roundtrip_keeps_pitch_class(base in 0i32..12, alteration in -3i32..=3) {
        let note = Note::new(base, alteration);
        let reparsed = parse_note(&note.name()).unwrap();
        prop_assert!(reparsed.is_enharmonic(&note), "{} lost its class", note.name());
    }

    /// Canonical spellings name themselves.
    #[test]
    fn canonical_spelling_is_stable(
        letter in "[A-G]",
        accidentals in prop::sample::select(vec!["", "#", "##", "b", "bb"]),
    ) {
        let notation = format!("{}{}", letter, accidentals);
        prop_assert_eq!(parse_note(&notation).unwrap().name(), notation);
    }

    /// Interval names reparse to an interval of the same size.
    ///
    /// Lowering a major interval twice names it diminished, which parses back
    /// as a single step down, so those are excluded.
    #[test]
    fn interval_name_roundtrip_keeps_semitones(distance in 0i32..7, alteration in -2i32..=2) {
        prop_assume!(alteration >= -1 || default_quality(distance) == Quality::Perfect);
        let interval = Interval::new(distance, alteration);
        let reparsed = parse_interval(&interval.name()).unwrap();
        prop_assert_eq!(reparsed.letter_distance(), distance);
        prop_assert_eq!(reparsed.semitones(), interval.semitones());
    }
}

// ============================================================================
// 3. Arithmetic invariants
// ============================================================================

proptest! {
    /// Transposition lands on the expected chromatic class with a small alteration.
    #[test]
    fn transpose_hits_target_class(
        base in 0i32..12,
        alteration in -2i32..=2,
        distance in 0i32..7,
        quality in -2i32..=2,
    ) {
        let note = Note::new(base, alteration);
        let interval = Interval::new(distance, quality);
        let result = transpose(note, interval);

        let expected = (note.pitch_class() + i64::from(interval.semitones())).rem_euclid(12);
        prop_assert_eq!(result.pitch_class().rem_euclid(12), expected);
        prop_assert!(result.alteration() > -6 && result.alteration() <= 6);
    }

    /// Stacking wraps letter distances and adds alterations.
    #[test]
    fn sum_wraps_distance(a in 0i32..7, b in 0i32..7, x in -3i32..=3, y in -3i32..=3) {
        let total = sum(Interval::new(a, x), Interval::new(b, y));
        prop_assert!((0..7).contains(&total.letter_distance()));
        prop_assert_eq!(total.alteration(), x + y);
    }

    /// Letter distance between two notes is antisymmetric.
    #[test]
    fn between_is_antisymmetric(a in "[A-G][#b]?", b in "[A-G][#b]?") {
        let a = parse_note(&a).unwrap();
        let b = parse_note(&b).unwrap();
        prop_assert_eq!(
            between(a, b).letter_distance(),
            -between(b, a).letter_distance()
        );
    }

    /// Circles are bounded and sorted by size.
    #[test]
    fn circle_is_sorted(distance in 0i32..7, alteration in -2i32..=2) {
        let cycle = circle(Interval::new(distance, alteration));
        prop_assert!(!cycle.is_empty() && cycle.len() <= MAX_CIRCLE_STEPS);
        let sizes: Vec<i32> = cycle.iter().map(|i| i.semitones()).collect();
        prop_assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }
}

// ============================================================================
// 4. Serialization
// ============================================================================

proptest! {
    /// Any note survives a JSON round trip, including gap slots and huge alterations.
    #[test]
    fn note_json_roundtrip(base in any::<i32>(), alteration in any::<i32>()) {
        let note = Note::new(base, alteration);
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, note);
    }

    /// Any interval survives a JSON round trip, including ones its name cannot spell.
    #[test]
    fn interval_json_roundtrip(distance in any::<i32>(), alteration in any::<i32>()) {
        let interval = Interval::new(distance, alteration);
        let json = serde_json::to_string(&interval).unwrap();
        let back: Interval = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, interval);
    }
}
