//! Interval qualities and the quality alteration rule.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// Interval quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// One semitone below Major.
    #[serde(rename = "m")]
    Minor,
    /// Below Perfect or Minor.
    #[serde(rename = "D")]
    Diminished,
    /// Default quality of unisons, fourths and fifths.
    #[serde(rename = "P")]
    Perfect,
    /// Default quality of seconds, thirds, sixths and sevenths.
    #[serde(rename = "M")]
    Major,
    /// Above Perfect or Major.
    #[serde(rename = "A")]
    Augmented,
}

/// Default quality for each letter distance (unison through seventh).
pub const DEFAULT_QUALITIES: [Quality; 7] = [
    Quality::Perfect,
    Quality::Major,
    Quality::Major,
    Quality::Perfect,
    Quality::Perfect,
    Quality::Major,
    Quality::Major,
];

impl Quality {
    /// Short notation symbol.
    pub fn symbol(self) -> char {
        match self {
            Quality::Minor => 'm',
            Quality::Diminished => 'D',
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Augmented => 'A',
        }
    }

    /// Alteration contributed by one occurrence of this quality's symbol.
    pub fn delta(self) -> i32 {
        match self {
            Quality::Minor | Quality::Diminished => -1,
            Quality::Perfect | Quality::Major => 0,
            Quality::Augmented => 1,
        }
    }

    /// English name, e.g. "Minor".
    pub fn full_name(self) -> &'static str {
        match self {
            Quality::Minor => "Minor",
            Quality::Diminished => "Diminished",
            Quality::Perfect => "Perfect",
            Quality::Major => "Major",
            Quality::Augmented => "Augmented",
        }
    }

    /// Look up a quality by its notation symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'm' => Some(Quality::Minor),
            'D' => Some(Quality::Diminished),
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'A' => Some(Quality::Augmented),
            _ => None,
        }
    }

    /// Only diminished and augmented may be stacked ("DD", "AAA").
    pub fn is_repeatable(self) -> bool {
        matches!(self, Quality::Diminished | Quality::Augmented)
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Default quality for a letter distance, taken modulo 7.
pub fn default_quality(letter_distance: i32) -> Quality {
    DEFAULT_QUALITIES[letter_distance.rem_euclid(7) as usize]
}

/// Apply an alteration to a base quality, producing its notation.
///
/// Raising always stacks augmented symbols. Lowering a major quality passes
/// through minor first; lowering anything else stacks diminished symbols.
///
/// # Examples
/// ```
/// use tonal::interval::{alter_quality, Quality};
///
/// assert_eq!(alter_quality(Quality::Major, 0), "M");
/// assert_eq!(alter_quality(Quality::Major, -1), "m");
/// assert_eq!(alter_quality(Quality::Major, -3), "DD");
/// assert_eq!(alter_quality(Quality::Perfect, -1), "D");
/// assert_eq!(alter_quality(Quality::Perfect, 2), "AA");
/// ```
pub fn alter_quality(base: Quality, alteration: i32) -> String {
    if alteration == 0 {
        return base.symbol().to_string();
    }
    if alteration > 0 {
        return repeat_symbol(Quality::Augmented, alteration);
    }
    match base {
        Quality::Major => alter_quality(Quality::Minor, alteration + 1),
        _ => repeat_symbol(Quality::Diminished, alteration),
    }
}

fn repeat_symbol(quality: Quality, count: i32) -> String {
    std::iter::repeat(quality.symbol())
        .take(count.unsigned_abs() as usize)
        .collect()
}

/// Parse a quality run ("m", "P", "M", "DD", "AAA") into its quality and length.
pub(crate) fn parse_quality_run(notation: &str, run: &str) -> Result<(Quality, usize)> {
    let invalid = || TheoryError::InvalidQuality {
        notation: notation.to_string(),
        quality: run.to_string(),
    };

    let mut symbols = run.chars();
    let quality = symbols
        .next()
        .and_then(Quality::from_symbol)
        .ok_or_else(invalid)?;

    let mut count = 1;
    for symbol in symbols {
        if symbol != quality.symbol() || !quality.is_repeatable() {
            return Err(invalid());
        }
        count += 1;
    }

    Ok((quality, count))
}
