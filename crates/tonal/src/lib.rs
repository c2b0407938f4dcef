//! Tonal - Western Tonal Notation Arithmetic
//!
//! This crate converts between human-readable note and interval notation and
//! a compact numeric representation, and derives one from another: the
//! interval between two notes, a note transposed by an interval, and the
//! cycle produced by stacking an interval on itself.
//!
//! # Notation
//!
//! - **Notes**: an uppercase letter A-G followed by any run of `#` (sharp)
//!   and `b` (flat), e.g. `"C"`, `"F#"`, `"Ebb"`.
//! - **Intervals**: a 1-based ordinal followed by a quality, e.g. `"1P"`,
//!   `"3m"`, `"5AA"`. Qualities are `m`, `D`, `P`, `M`, `A`; `D` and `A`
//!   may be repeated.
//!
//! # Example
//!
//! ```
//! use tonal::interval::parse_interval;
//! use tonal::note::parse_note;
//! use tonal::scale;
//!
//! let c_sharp = parse_note("C#")?;
//! let major_third = parse_interval("3M")?;
//! assert_eq!(c_sharp.transpose(major_third).name(), "E#");
//!
//! let e_flat_major = scale::major("Eb")?;
//! assert_eq!(e_flat_major.names(), ["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
//! # Ok::<(), tonal::TheoryError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: Note parsing, naming and transposition
//! - [`interval`]: Interval parsing, naming, arithmetic and circles
//! - [`pitch_class`]: Pitch class to note and frequency
//! - [`frequency`]: Octave shifts and tuning configuration
//! - [`scale`]: Scales built from a root and an interval pattern
//! - [`error`]: Error types

pub mod error;
pub mod frequency;
pub mod interval;
pub mod note;
pub mod pitch_class;
pub mod scale;

// Re-export main types
pub use error::{Result, TheoryError};
pub use frequency::{shift_octave, Tuning};
pub use interval::{Interval, Quality};
pub use note::Note;
pub use pitch_class::fundamental_frequency;
pub use scale::Scale;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
