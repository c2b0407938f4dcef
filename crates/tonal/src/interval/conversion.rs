//! Interval notation parsing, naming, and English expansion.

use super::quality::{alter_quality, default_quality, parse_quality_run};
use super::Interval;
use crate::error::{Result, TheoryError};

/// English ordinal for distances 1 through 7.
const ORDINAL_NAMES: [&str; 7] = [
    "Unison", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh",
];

/// Parse interval notation (e.g., "1P", "3m", "5AA", "10M").
///
/// The leading digits are the 1-based ordinal; the rest is the quality.
/// Every `m` or `D` lowers by one, every `A` raises by one, `P` and `M` are
/// neutral.
///
/// # Examples
/// ```
/// use tonal::interval::parse_interval;
///
/// let minor_third = parse_interval("3m").unwrap();
/// assert_eq!(minor_third.letter_distance(), 2);
/// assert_eq!(minor_third.alteration(), -1);
///
/// assert_eq!(parse_interval("5AA").unwrap().alteration(), 2);
/// assert_eq!(parse_interval("10M").unwrap().letter_distance(), 9);
/// assert!(parse_interval("M3").is_err());
/// ```
pub fn parse_interval(notation: &str) -> Result<Interval> {
    let (ordinal, run) = split_notation(notation)?;
    let (quality, count) = parse_quality_run(notation, run)?;
    Ok(Interval::new(ordinal - 1, quality.delta() * count as i32))
}

/// Notation of an interval, e.g. "3m".
///
/// # Examples
/// ```
/// use tonal::interval::{interval_name, Interval};
///
/// assert_eq!(interval_name(Interval::new(2, -1)), "3m");
/// assert_eq!(interval_name(Interval::new(4, 0)), "5P");
/// assert_eq!(interval_name(Interval::new(3, 1)), "4A");
/// ```
pub fn interval_name(interval: Interval) -> String {
    let distance = interval.letter_distance();
    format!(
        "{}{}",
        i64::from(distance).abs() + 1,
        alter_quality(default_quality(distance), interval.alteration())
    )
}

/// Expand interval notation to English words, e.g. "3m" to "Minor Third".
///
/// Fails with [`TheoryError::UnsupportedDistance`] beyond the seventh.
///
/// # Examples
/// ```
/// use tonal::interval::expand_name;
///
/// assert_eq!(expand_name("3m").unwrap(), "Minor Third");
/// assert_eq!(expand_name("1P").unwrap(), "Perfect Unison");
/// assert_eq!(expand_name("4AA").unwrap(), "Doubly Augmented Fourth");
/// assert!(expand_name("9M").is_err());
/// ```
pub fn expand_name(notation: &str) -> Result<String> {
    let (ordinal, run) = split_notation(notation)?;
    let (quality, count) = parse_quality_run(notation, run)?;
    let ordinal_name = ORDINAL_NAMES
        .get((ordinal - 1) as usize)
        .ok_or(TheoryError::UnsupportedDistance { distance: ordinal })?;

    Ok(format!(
        "{}{} {}",
        multiplier(count),
        quality.full_name(),
        ordinal_name
    ))
}

/// English name of an interval. See [`expand_name`].
pub fn full_name(interval: Interval) -> Result<String> {
    expand_name(&interval_name(interval))
}

/// Split notation into its ordinal and the raw quality run.
fn split_notation(notation: &str) -> Result<(i32, &str)> {
    if notation.is_empty() {
        return Err(TheoryError::EmptyNotation);
    }

    let digits_end = notation
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(notation.len());
    let (digits, run) = notation.split_at(digits_end);

    let invalid = || TheoryError::InvalidOrdinal {
        notation: notation.to_string(),
    };
    let ordinal: i32 = digits.parse().map_err(|_| invalid())?;
    if ordinal < 1 {
        return Err(invalid());
    }

    Ok((ordinal, run))
}

fn multiplier(count: usize) -> String {
    match count {
        1 => String::new(),
        2 => "Doubly ".to_string(),
        3 => "Triply ".to_string(),
        n => format!("{}x ", n),
    }
}
