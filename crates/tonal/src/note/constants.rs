//! Fixed tables for note spelling.

/// The seven natural letters in staff order, starting from C.
pub const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Chromatic position of each natural letter (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub const NATURAL_PITCH_CLASSES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Sharp accidental symbol (+1 semitone).
pub const SHARP: char = '#';

/// Flat accidental symbol (-1 semitone).
pub const FLAT: char = 'b';

/// Letter index (into [`LETTERS`]) for each of the 12 chromatic slots.
/// `None` marks the gaps between naturals that have no letter of their own.
pub(crate) const CHROMATIC_SLOTS: [Option<usize>; 12] = [
    Some(0), // C
    None,
    Some(1), // D
    None,
    Some(2), // E
    Some(3), // F
    None,
    Some(4), // G
    None,
    Some(5), // A
    None,
    Some(6), // B
];
