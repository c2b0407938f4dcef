//! Notes: letter + accidental spellings without octave.
//!
//! A [`Note`] stores a chromatic slot and an alteration. Parsing notation
//! always lands on a natural slot; arithmetic may produce gap slots, which
//! are respelled from the letter below when the note is named.

mod constants;
mod conversion;
mod transpose;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::interval::{between, Interval};

pub use constants::{FLAT, LETTERS, NATURAL_PITCH_CLASSES, SHARP};
pub use conversion::{accidental_string, letter, letters, note_name, parse_note};
pub use transpose::transpose;

pub(crate) use conversion::spelling;

/// A pitch name without octave.
///
/// Serializes as its stored pair, `{"base_pitch_class": 1, "alteration": 0}`,
/// so gap-slot notes and exotic spellings survive a round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "NoteFields", into = "NoteFields")]
pub struct Note {
    base_pitch_class: i32,
    alteration: i32,
}

impl Note {
    /// Create a note from a chromatic slot and an alteration.
    ///
    /// `base_pitch_class` is reduced modulo 12; `alteration` is kept as is.
    pub fn new(base_pitch_class: i32, alteration: i32) -> Self {
        Self {
            base_pitch_class: base_pitch_class.rem_euclid(12),
            alteration,
        }
    }

    /// Parse note notation. See [`parse_note`].
    pub fn parse(notation: &str) -> Result<Self, TheoryError> {
        parse_note(notation)
    }

    /// Chromatic slot of the base letter, in 0..=11.
    pub fn base_pitch_class(&self) -> i32 {
        self.base_pitch_class
    }

    /// Net accidental applied to the base slot.
    pub fn alteration(&self) -> i32 {
        self.alteration
    }

    /// `base_pitch_class + alteration`, not reduced modulo 12.
    ///
    /// Widened to `i64` so extreme alterations cannot overflow.
    pub fn pitch_class(&self) -> i64 {
        i64::from(self.base_pitch_class) + i64::from(self.alteration)
    }

    /// Display name. See [`note_name`].
    pub fn name(&self) -> String {
        note_name(*self)
    }

    /// Natural letter of the display name.
    pub fn letter(&self) -> char {
        letter(*self)
    }

    /// Transpose by an interval. See [`transpose`].
    pub fn transpose(&self, interval: Interval) -> Note {
        transpose(*self, interval)
    }

    /// Interval from this note up to `other`. See [`between`].
    pub fn interval_to(&self, other: Note) -> Interval {
        between(*self, other)
    }

    /// Whether both notes sound the same chromatic class.
    pub fn is_enharmonic(&self, other: &Note) -> bool {
        self.pitch_class().rem_euclid(12) == other.pitch_class().rem_euclid(12)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note(s)
    }
}

/// Wire form of a [`Note`]; deserializing reduces the slot modulo 12.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoteFields {
    base_pitch_class: i32,
    alteration: i32,
}

impl From<NoteFields> for Note {
    fn from(fields: NoteFields) -> Self {
        Note::new(fields.base_pitch_class, fields.alteration)
    }
}

impl From<Note> for NoteFields {
    fn from(note: Note) -> Self {
        Self {
            base_pitch_class: note.base_pitch_class,
            alteration: note.alteration,
        }
    }
}
