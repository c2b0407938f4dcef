//! Scales: a root note and a pattern of intervals above it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::{circle, parse_interval, Interval};
use crate::note::{parse_note, transpose, Note};

/// Generator of the major scale when stacked on itself.
pub const MAJOR_GENERATOR: Interval = Interval::PERFECT_FIFTH;

/// A root note and the intervals of each degree, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub root: Note,
    pub intervals: Vec<Interval>,
}

impl Scale {
    /// Create a scale from a root and intervals.
    pub fn new(root: Note, intervals: Vec<Interval>) -> Self {
        Self { root, intervals }
    }

    /// Create a scale from notation strings.
    ///
    /// # Examples
    /// ```
    /// use tonal::scale::Scale;
    ///
    /// let minor_triad = Scale::from_notation("A", &["1P", "3m", "5P"]).unwrap();
    /// assert_eq!(minor_triad.names(), ["A", "C", "E"]);
    /// ```
    pub fn from_notation(root: &str, intervals: &[&str]) -> Result<Self> {
        let root = parse_note(root)?;
        let intervals = intervals
            .iter()
            .map(|notation| parse_interval(notation))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(root, intervals))
    }

    /// Scale whose degrees are the circle of `generator`.
    pub fn from_generator(root: Note, generator: Interval) -> Self {
        Self::new(root, circle(generator))
    }

    /// Major scale: the circle of fifths above `root`.
    pub fn major(root: Note) -> Self {
        Self::from_generator(root, MAJOR_GENERATOR)
    }

    /// Notes of the scale, in interval order.
    pub fn notes(&self) -> Vec<Note> {
        self.intervals
            .iter()
            .map(|interval| transpose(self.root, *interval))
            .collect()
    }

    /// Display names of the scale's notes.
    pub fn names(&self) -> Vec<String> {
        self.notes().iter().map(Note::name).collect()
    }
}

/// Major scale rooted at note notation.
///
/// # Examples
/// ```
/// use tonal::scale::major;
///
/// assert_eq!(major("Eb").unwrap().names(), ["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
/// ```
pub fn major(root: &str) -> Result<Scale> {
    Ok(Scale::major(parse_note(root)?))
}
