//! Detect double-bookings between a candidate entry and accepted entries.
//!
//! Every accepted entry whose interval overlaps the candidate is checked for a
//! shared faculty member and a shared classroom. Both can fire for the same
//! entry, producing two separate conflicts.

use crate::data::{ConflictInfo, ConflictKind, ScheduleEntry};
use crate::error::TimeResult;
use crate::time::{Interval, overlap};

pub const FACULTY_CONFLICT_MESSAGE: &str = "Faculty is already scheduled during this time slot";
pub const CLASSROOM_CONFLICT_MESSAGE: &str = "Classroom is already booked during this time slot";

/// Find every conflict `candidate` has with `existing`, in scan order.
///
/// `existing` is never modified. Entries on other days or in adjacent slots
/// produce nothing even when faculty or classroom match.
pub fn find_conflicts(
    candidate: &ScheduleEntry,
    existing: &[ScheduleEntry],
) -> TimeResult<Vec<ConflictInfo>> {
    let mut conflicts = Vec::new();

    for entry in existing {
        if !overlap(Interval::from(candidate), Interval::from(entry))? {
            continue;
        }
        if entry.faculty_id == candidate.faculty_id {
            conflicts.push(ConflictInfo {
                kind: ConflictKind::Faculty,
                message: FACULTY_CONFLICT_MESSAGE.to_string(),
                related_entries: vec![entry.clone()],
            });
        }
        if entry.classroom_id == candidate.classroom_id {
            conflicts.push(ConflictInfo {
                kind: ConflictKind::Classroom,
                message: CLASSROOM_CONFLICT_MESSAGE.to_string(),
                related_entries: vec![entry.clone()],
            });
        }
    }

    Ok(conflicts)
}
