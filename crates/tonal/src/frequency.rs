//! Frequency arithmetic and tuning configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reference pitch in Hz (A above middle C).
pub const REFERENCE_HZ: f64 = 440.0;

/// Pitch class of the reference pitch (A).
pub const REFERENCE_PITCH_CLASS: i32 = 9;

/// Octaves between the reference pitch and the fundamental octave.
pub const FUNDAMENTAL_OCTAVE_OFFSET: i32 = 4;

/// Shift a frequency by `octaves` octaves (negative shifts down).
///
/// # Examples
/// ```
/// use tonal::frequency::shift_octave;
///
/// assert_eq!(shift_octave(440.0, 1), 880.0);
/// assert_eq!(shift_octave(440.0, -2), 110.0);
/// ```
pub fn shift_octave(frequency: f64, octaves: i32) -> f64 {
    frequency * 2.0_f64.powi(octaves)
}

/// Equal-temperament tuning.
///
/// Missing fields take the A440 defaults, so `{}` is a valid tuning.
///
/// # Examples
/// ```
/// use tonal::frequency::Tuning;
///
/// let baroque = Tuning::from_json(r#"{ "reference_hz": 415.0 }"#).unwrap();
/// assert!((baroque.fundamental_frequency(9) - 415.0 / 16.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Frequency of the reference pitch in Hz.
    pub reference_hz: f64,
    /// Pitch class the reference frequency belongs to.
    pub reference_pitch_class: i32,
    /// How many octaves below the reference the fundamental octave lies.
    pub octave_offset: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            reference_hz: REFERENCE_HZ,
            reference_pitch_class: REFERENCE_PITCH_CLASS,
            octave_offset: FUNDAMENTAL_OCTAVE_OFFSET,
        }
    }
}

impl Tuning {
    /// Parse a tuning from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Frequency of a pitch class in the fundamental octave.
    ///
    /// `reference_hz * 2^((pc - reference_pitch_class) / 12)`, shifted down
    /// `octave_offset` octaves.
    pub fn fundamental_frequency(&self, pitch_class: i64) -> f64 {
        let semitones = (pitch_class - i64::from(self.reference_pitch_class)) as f64;
        shift_octave(
            self.reference_hz * 2.0_f64.powf(semitones / 12.0),
            -self.octave_offset,
        )
    }

    /// Frequency of a pitch class `octave` octaves above the fundamental octave.
    pub fn frequency(&self, pitch_class: i64, octave: i32) -> f64 {
        shift_octave(self.fundamental_frequency(pitch_class), octave)
    }
}
