//! Tests for time arithmetic and the interval overlap test.

use timetable_solver::{Day, Interval, TimeError, overlap, to_minutes, to_time_string};

fn iv(day: Day, start: &'static str, end: &'static str) -> Interval<'static> {
    Interval { day, start, end }
}

#[test]
fn minutes_round_trip_through_formatting() {
    for minutes in [0, 59, 60, 485, 720, 1439] {
        let text = to_time_string(minutes).unwrap();
        assert_eq!(to_minutes(&text).unwrap(), minutes);
    }
}

#[test]
fn missing_colon_is_a_parse_error() {
    assert_eq!(to_minutes("0900"), Err(TimeError::Parse("0900".to_string())));
}

#[test]
fn partial_overlap_detected() {
    let a = iv(Day::Monday, "09:00", "10:00");
    let b = iv(Day::Monday, "09:30", "10:30");
    assert!(overlap(a, b).unwrap());
}

#[test]
fn adjacent_slots_do_not_overlap() {
    let a = iv(Day::Monday, "09:00", "10:00");
    let b = iv(Day::Monday, "10:00", "11:00");
    assert!(!overlap(a, b).unwrap());
    assert!(!overlap(b, a).unwrap());
}

#[test]
fn same_times_on_different_days_do_not_overlap() {
    let a = iv(Day::Monday, "09:00", "10:00");
    let b = iv(Day::Tuesday, "09:00", "10:00");
    assert!(!overlap(a, b).unwrap());
}

#[test]
fn contained_interval_overlaps() {
    let a = iv(Day::Friday, "08:00", "12:00");
    let b = iv(Day::Friday, "10:00", "11:00");
    assert!(overlap(a, b).unwrap());
    assert!(overlap(b, a).unwrap());
}

#[test]
fn different_days_skip_parsing() {
    let a = iv(Day::Monday, "garbage", "10:00");
    let b = iv(Day::Tuesday, "09:00", "10:00");
    assert_eq!(overlap(a, b), Ok(false));
}

#[test]
fn malformed_time_on_same_day_is_an_error() {
    let a = iv(Day::Monday, "garbage", "10:00");
    let b = iv(Day::Monday, "09:00", "10:00");
    assert!(matches!(overlap(a, b), Err(TimeError::Parse(_))));
}
