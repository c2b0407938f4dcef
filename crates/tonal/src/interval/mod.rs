//! Intervals: letter distance plus quality alteration.
//!
//! An [`Interval`] counts natural-letter steps (`letter_distance`, 0 for a
//! unison) and how far the quality sits from that distance's default
//! (Perfect for unisons, fourths and fifths, Major for the rest).

mod arithmetic;
mod conversion;
mod quality;


use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

pub use arithmetic::{between, circle, semitones, sum, MAX_CIRCLE_STEPS};
pub use conversion::{expand_name, full_name, interval_name, parse_interval};
pub use quality::{alter_quality, default_quality, Quality, DEFAULT_QUALITIES};

/// Distance between two notes.
///
/// Serializes as `{"letter_distance": 2, "alteration": -1}`; the short name
/// is not used on the wire because it does not round-trip every pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interval {
    letter_distance: i32,
    alteration: i32,
}

impl Interval {
    /// Perfect unison ("1P").
    pub const UNISON: Interval = Interval::new(0, 0);

    /// Perfect fifth ("5P").
    pub const PERFECT_FIFTH: Interval = Interval::new(4, 0);

    /// Create an interval from a letter distance and a quality alteration.
    pub const fn new(letter_distance: i32, alteration: i32) -> Self {
        Self {
            letter_distance,
            alteration,
        }
    }

    /// Parse interval notation. See [`parse_interval`].
    pub fn parse(notation: &str) -> Result<Self, TheoryError> {
        parse_interval(notation)
    }

    /// Natural-letter steps between root and target.
    pub fn letter_distance(&self) -> i32 {
        self.letter_distance
    }

    /// Deviation from the default quality.
    pub fn alteration(&self) -> i32 {
        self.alteration
    }

    /// Quality notation without the ordinal, e.g. "m" or "AA".
    pub fn quality(&self) -> String {
        alter_quality(default_quality(self.letter_distance), self.alteration)
    }

    /// Short notation. See [`interval_name`].
    pub fn name(&self) -> String {
        interval_name(*self)
    }

    /// English name. See [`full_name`].
    pub fn full_name(&self) -> Result<String, TheoryError> {
        full_name(*self)
    }

    /// Chromatic size in 0..=11. See [`semitones`].
    pub fn semitones(&self) -> i32 {
        semitones(*self)
    }

    /// Stacked cycle of this interval. See [`circle`].
    pub fn circle(&self) -> Vec<Interval> {
        circle(*self)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        sum(self, rhs)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}
