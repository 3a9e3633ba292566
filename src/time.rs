//! Wall-clock arithmetic and the interval overlap test.
//!
//! Times are `HH:MM` strings on a single day. Two intervals overlap only when
//! they share a day and `a.start < b.end && b.start < a.end`, so back-to-back
//! slots (one ending exactly when the next starts) never collide.

use crate::data::{Day, ScheduleEntry, TimeSlot};
use crate::error::{TimeError, TimeResult};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses `HH:MM` into minutes since midnight.
///
/// Both components must be plain ASCII digits: no whitespace, no sign.
/// Ranges are not checked, so `"25:99"` parses to `25 * 60 + 99`, but a
/// value too large for `i64` is a parse error.
pub fn to_minutes(time: &str) -> TimeResult<i64> {
    let err = || TimeError::Parse(time.to_string());
    let (hours, minutes) = time.split_once(':').ok_or_else(err)?;
    let hours = parse_component(hours).ok_or_else(err)?;
    let minutes = parse_component(minutes).ok_or_else(err)?;
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(err)
}

fn parse_component(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
pub fn to_time_string(minutes: i64) -> TimeResult<String> {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return Err(TimeError::OutOfRange(minutes));
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// A time range on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<'a> {
    pub day: Day,
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> From<&'a TimeSlot> for Interval<'a> {
    fn from(slot: &'a TimeSlot) -> Self {
        Interval {
            day: slot.day,
            start: &slot.start_time,
            end: &slot.end_time,
        }
    }
}

impl<'a> From<&'a ScheduleEntry> for Interval<'a> {
    fn from(entry: &'a ScheduleEntry) -> Self {
        Interval {
            day: entry.day,
            start: &entry.start_time,
            end: &entry.end_time,
        }
    }
}

/// Returns whether two intervals intersect.
///
/// Different days short-circuit before any parsing happens.
pub fn overlap(a: Interval<'_>, b: Interval<'_>) -> TimeResult<bool> {
    if a.day != b.day {
        return Ok(false);
    }
    let (a_start, a_end) = (to_minutes(a.start)?, to_minutes(a.end)?);
    let (b_start, b_end) = (to_minutes(b.start)?, to_minutes(b.end)?);
    Ok(a_start < b_end && b_start < a_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded() {
        assert_eq!(to_minutes("08:00"), Ok(480));
        assert_eq!(to_minutes("8:05"), Ok(485));
        assert_eq!(to_minutes("00:00"), Ok(0));
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!(to_minutes("0800"), Err(TimeError::Parse(_))));
        assert!(matches!(to_minutes("ab:cd"), Err(TimeError::Parse(_))));
        assert!(matches!(to_minutes(""), Err(TimeError::Parse(_))));
    }

    #[test]
    fn huge_components_fail_instead_of_overflowing() {
        assert!(matches!(
            to_minutes("999999999999999999:00"),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            to_minutes("00:99999999999999999999"),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn signs_and_whitespace_are_rejected() {
        for input in ["+8:05", "-1:30", " 8:05", "08: 05", "08:"] {
            assert!(
                matches!(to_minutes(input), Err(TimeError::Parse(_))),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn formats_with_padding() {
        assert_eq!(to_time_string(485).unwrap(), "08:05");
        assert_eq!(to_time_string(1439).unwrap(), "23:59");
    }

    #[test]
    fn out_of_range_minutes_are_rejected() {
        assert_eq!(to_time_string(-1), Err(TimeError::OutOfRange(-1)));
        assert_eq!(to_time_string(1440), Err(TimeError::OutOfRange(1440)));
    }
}
