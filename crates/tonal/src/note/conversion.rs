//! Note notation parsing and naming.

use log::trace;

use super::constants::{CHROMATIC_SLOTS, FLAT, LETTERS, NATURAL_PITCH_CLASSES, SHARP};
use super::Note;
use crate::error::{Result, TheoryError};

/// The seven natural letters used for letter-distance arithmetic.
///
/// # Examples
/// ```
/// use tonal::note::letters;
///
/// assert_eq!(letters(), ['C', 'D', 'E', 'F', 'G', 'A', 'B']);
/// ```
pub fn letters() -> [char; 7] {
    LETTERS
}

/// Render an alteration as a run of accidental symbols.
///
/// # Examples
/// ```
/// use tonal::note::accidental_string;
///
/// assert_eq!(accidental_string(0), "");
/// assert_eq!(accidental_string(2), "##");
/// assert_eq!(accidental_string(-3), "bbb");
/// ```
pub fn accidental_string(alteration: i64) -> String {
    let symbol = if alteration < 0 { FLAT } else { SHARP };
    std::iter::repeat(symbol)
        .take(alteration.unsigned_abs() as usize)
        .collect()
}

/// Parse note notation (e.g., "C", "F#", "Ebb") into a [`Note`].
///
/// The first character must be an uppercase letter A-G. Every following
/// character is an accidental: `b` lowers by one semitone, `#` raises by one.
///
/// # Examples
/// ```
/// use tonal::note::parse_note;
///
/// let note = parse_note("Ebb").unwrap();
/// assert_eq!(note.base_pitch_class(), 4);
/// assert_eq!(note.alteration(), -2);
///
/// assert!(parse_note("H").is_err());
/// assert!(parse_note("Cx").is_err());
/// ```
pub fn parse_note(notation: &str) -> Result<Note> {
    let mut chars = notation.chars();
    let letter = chars.next().ok_or(TheoryError::EmptyNotation)?;
    let index = letter_index(letter).ok_or_else(|| TheoryError::InvalidLetter {
        notation: notation.to_string(),
        found: letter,
    })?;

    let mut alteration = 0;
    for symbol in chars {
        alteration += match symbol {
            SHARP => 1,
            FLAT => -1,
            _ => {
                return Err(TheoryError::InvalidAccidental {
                    notation: notation.to_string(),
                    found: symbol,
                })
            }
        };
    }

    Ok(Note::new(NATURAL_PITCH_CLASSES[index], alteration))
}

/// Display name of a note, respelling gap slots as the letter below plus a sharp.
///
/// # Examples
/// ```
/// use tonal::note::{note_name, Note};
///
/// assert_eq!(note_name(Note::new(0, 0)), "C");
/// assert_eq!(note_name(Note::new(1, 0)), "C#");
/// assert_eq!(note_name(Note::new(4, -1)), "Eb");
/// assert_eq!(note_name(Note::new(10, 1)), "A##");
/// ```
pub fn note_name(note: Note) -> String {
    let (index, alteration) = spelling(note);
    format!("{}{}", LETTERS[index], accidental_string(alteration))
}

/// Natural letter of the note's display name.
///
/// # Examples
/// ```
/// use tonal::note::{letter, Note};
///
/// assert_eq!(letter(Note::new(6, 0)), 'F');
/// assert_eq!(letter(Note::new(11, -1)), 'B');
/// ```
pub fn letter(note: Note) -> char {
    LETTERS[spelling(note).0]
}

/// Index of an uppercase natural letter in [`LETTERS`].
pub(crate) fn letter_index(letter: char) -> Option<usize> {
    LETTERS.iter().position(|&l| l == letter)
}

/// Resolve a note to a (letter index, alteration) spelling.
///
/// Walks down one chromatic slot at a time, adding a sharp per step, until a
/// natural letter is found. Slot 0 is always C, so the walk ends within 12 steps.
/// The alteration is widened so respelling an extreme alteration cannot overflow.
pub(crate) fn spelling(note: Note) -> (usize, i64) {
    let pitch_class = note.base_pitch_class();
    let alteration = i64::from(note.alteration());

    (0..12)
        .find_map(|step| {
            let slot = (pitch_class - step).rem_euclid(12);
            CHROMATIC_SLOTS[slot as usize].map(|index| {
                if step > 0 {
                    trace!(
                        "respelled slot {} as {}{}",
                        pitch_class,
                        LETTERS[index],
                        accidental_string(alteration + i64::from(step))
                    );
                }
                (index, alteration + i64::from(step))
            })
        })
        .unwrap_or((0, alteration + i64::from(pitch_class)))
}
