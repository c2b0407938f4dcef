//! Letter-correct note transposition.

use super::constants::NATURAL_PITCH_CLASSES;
use super::conversion::spelling;
use super::Note;
use crate::interval::{semitones, Interval};

/// Transpose a note by an interval.
///
/// The result advances `letter_distance` staff positions from the note's
/// letter and lands on the chromatic class `pitch_class + semitones`, so the
/// spelling follows the interval (C# up a major third is E#, not F).
///
/// # Examples
/// ```
/// use tonal::note::{parse_note, transpose};
/// use tonal::interval::parse_interval;
///
/// let c = parse_note("C").unwrap();
/// assert_eq!(transpose(c, parse_interval("2m").unwrap()).name(), "Db");
///
/// let c_sharp = parse_note("C#").unwrap();
/// assert_eq!(transpose(c_sharp, parse_interval("3M").unwrap()).name(), "E#");
/// ```
pub fn transpose(note: Note, interval: Interval) -> Note {
    let (index, _) = spelling(note);
    let target_index = (index as i32 + interval.letter_distance().rem_euclid(7)) % 7;
    let base_pitch_class = NATURAL_PITCH_CLASSES[target_index as usize];

    let target = (note.pitch_class() + i64::from(semitones(interval))).rem_euclid(12) as i32;
    Note::new(
        base_pitch_class,
        nearest_alteration(target - base_pitch_class),
    )
}

/// Pick the representative of `alteration` mod 12 in (-6, 6].
pub(crate) fn nearest_alteration(alteration: i32) -> i32 {
    let alteration = alteration.rem_euclid(12);
    if alteration > 6 {
        alteration - 12
    } else {
        alteration
    }
}
