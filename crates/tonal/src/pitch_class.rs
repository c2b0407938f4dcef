//! Pitch class projections: integer class to note and to frequency.

use crate::frequency::Tuning;
use crate::note::Note;

/// Pitch class of a note: `base_pitch_class + alteration`.
///
/// The result is not reduced; use [`reduce`] for a canonical 0..=11 class.
///
/// # Examples
/// ```
/// use tonal::note::parse_note;
/// use tonal::pitch_class::from_note;
///
/// assert_eq!(from_note(parse_note("D").unwrap()), 2);
/// assert_eq!(from_note(parse_note("Cb").unwrap()), -1);
/// assert_eq!(from_note(parse_note("B#").unwrap()), 12);
/// ```
pub fn from_note(note: Note) -> i64 {
    note.pitch_class()
}

/// Canonical pitch class in 0..=11.
pub fn reduce(pitch_class: i64) -> i32 {
    pitch_class.rem_euclid(12) as i32
}

/// Canonical note for a pitch class, spelled natural or single-sharp.
///
/// # Examples
/// ```
/// use tonal::pitch_class::note;
///
/// assert_eq!(note(0).name(), "C");
/// assert_eq!(note(6).name(), "F#");
/// ```
pub fn note(pitch_class: i32) -> Note {
    Note::new(pitch_class, 0)
}

/// Fundamental frequency in Hz under the default A440 tuning.
///
/// # Examples
/// ```
/// use tonal::pitch_class::fundamental_frequency;
///
/// assert!((fundamental_frequency(0) - 16.3515978).abs() < 1e-6);
/// assert!((fundamental_frequency(9) - 27.5).abs() < 1e-9);
/// ```
pub fn fundamental_frequency(pitch_class: i64) -> f64 {
    Tuning::default().fundamental_frequency(pitch_class)
}
