//! Interval arithmetic: distance between notes, stacking, and circles.

use log::{trace, warn};

use super::Interval;
use crate::note::{spelling, Note, NATURAL_PITCH_CLASSES};

/// Upper bound on [`circle`] steps: every (letter, semitone) pair once.
pub const MAX_CIRCLE_STEPS: usize = 7 * 12;

/// Interval from `from` to `to`.
///
/// The letter distance is the signed difference of the two letters' positions
/// in C..B and is not wrapped: C to B is 6, B to C is -6. The alteration is
/// the difference of the two spellings' accidentals, saturating at the `i32`
/// range.
///
/// Accidentals are read from each note's resolved spelling, not the stored
/// pair: a gap-slot note such as `Note::new(1, 0)` counts as C#, so
/// `between(Note::new(1, 0), D)` is a minor second.
///
/// # Examples
/// ```
/// use tonal::interval::between;
/// use tonal::note::parse_note;
///
/// let c = parse_note("C").unwrap();
/// let b = parse_note("B").unwrap();
/// assert_eq!(between(c, b).letter_distance(), 6);
/// assert_eq!(between(b, c).letter_distance(), -6);
/// ```
pub fn between(from: Note, to: Note) -> Interval {
    let (from_index, from_alteration) = spelling(from);
    let (to_index, to_alteration) = spelling(to);
    let alteration =
        (to_alteration - from_alteration).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    Interval::new(to_index as i32 - from_index as i32, alteration as i32)
}

/// Stack two intervals.
///
/// Letter distances are summed and wrapped into 0..=6; alterations are summed
/// without reduction, saturating at the `i32` range.
///
/// # Examples
/// ```
/// use tonal::interval::{parse_interval, sum};
///
/// let major_third = parse_interval("3M").unwrap();
/// let minor_third = parse_interval("3m").unwrap();
/// assert_eq!(sum(major_third, major_third).name(), "5P");
/// assert_eq!(sum(major_third, sum(minor_third, major_third)).name(), "7m");
/// ```
pub fn sum(first: Interval, second: Interval) -> Interval {
    Interval::new(
        (first.letter_distance().rem_euclid(7) + second.letter_distance().rem_euclid(7)) % 7,
        first.alteration().saturating_add(second.alteration()),
    )
}

/// Chromatic size of an interval, in 0..=11.
///
/// Distances beyond a seventh are folded down one letter at a time, each fold
/// adding one semitone of alteration. Negative distances wrap modulo 7.
///
/// # Examples
/// ```
/// use tonal::interval::{parse_interval, semitones};
///
/// assert_eq!(semitones(parse_interval("2M").unwrap()), 2);
/// assert_eq!(semitones(parse_interval("1A").unwrap()), 1);
/// assert_eq!(semitones(parse_interval("3D").unwrap()), 3);
/// assert_eq!(semitones(parse_interval("4A").unwrap()), 6);
/// ```
pub fn semitones(interval: Interval) -> i32 {
    let distance = interval.letter_distance();
    let mut alteration = i64::from(interval.alteration());
    let distance = if distance > 6 {
        alteration += i64::from(distance) - 6;
        6
    } else {
        distance.rem_euclid(7)
    };
    let base = i64::from(NATURAL_PITCH_CLASSES[distance as usize]);
    (base + alteration).rem_euclid(12) as i32
}

/// Stack an interval on itself until the chromatic cycle closes.
///
/// Starts with the interval itself and keeps adding it until the running
/// total has the same semitone size as the starting interval. The result is
/// sorted by ascending semitones, so the circle of fifths yields a major scale
/// pattern.
///
/// # Examples
/// ```
/// use tonal::interval::{circle, parse_interval};
///
/// let names: Vec<String> = circle(parse_interval("5P").unwrap())
///     .iter()
///     .map(|i| i.name())
///     .collect();
/// assert_eq!(names, ["1P", "2M", "3M", "4P", "5P", "6M", "7M"]);
/// ```
pub fn circle(interval: Interval) -> Vec<Interval> {
    let start = semitones(interval);
    let mut cycle = vec![interval];
    let mut running = interval;

    loop {
        running = sum(running, interval);
        if semitones(running) == start {
            break;
        }
        if cycle.len() >= MAX_CIRCLE_STEPS {
            warn!(
                "circle of {} did not close after {} steps",
                interval, MAX_CIRCLE_STEPS
            );
            break;
        }
        trace!("circle of {}: step {} reached {}", interval, cycle.len(), running);
        cycle.push(running);
    }

    cycle.sort_by_key(|i| semitones(*i));
    cycle
}
