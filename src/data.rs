use serde::{Deserialize, Serialize};
use std::fmt;

// Type aliases for clarity
pub type FacultyId = String;
pub type SubjectId = String;
pub type ClassroomId = String;
pub type TimeSlotId = String;

/// Calendar day label. The generated grid only uses the weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One interval of the weekly grid. Times are zero-padded `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
}

/// A faculty member with the slots they can (and would like to) teach in.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    pub department: String,
    /// Empty means unconstrained: the scheduler falls back to the whole grid.
    #[serde(default)]
    pub available_time_slots: Vec<TimeSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time_slots: Option<Vec<TimeSlot>>,
}

/// A subject to be scheduled, owned by exactly one faculty member.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub code: String,
    pub faculty_id: FacultyId,
    /// Minutes. Informational only, placement always uses a single grid slot.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_room_type: Option<String>,
}

/// Represents a physical room.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
    pub capacity: u32,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
}

/// Represents a single, scheduled subject assignment.
///
/// Day and times are copied from the chosen slot so entries can be compared
/// without looking the slot up again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub subject_id: SubjectId,
    pub faculty_id: FacultyId,
    pub classroom_id: ClassroomId,
    pub time_slot_id: TimeSlotId,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleEntry {
    /// Builds the entry for placing `subject_id` into `classroom_id` at `slot`.
    /// The id is derived from the three keys, so repeating a placement
    /// always yields the same id.
    pub fn new(
        subject_id: &str,
        faculty_id: &str,
        classroom_id: &str,
        slot: &TimeSlot,
    ) -> Self {
        Self {
            id: entry_id(subject_id, classroom_id, &slot.id),
            subject_id: subject_id.to_string(),
            faculty_id: faculty_id.to_string(),
            classroom_id: classroom_id.to_string(),
            time_slot_id: slot.id.clone(),
            day: slot.day,
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
        }
    }
}

pub fn entry_id(subject_id: &str, classroom_id: &str, time_slot_id: &str) -> String {
    format!("{}-{}-{}", subject_id, classroom_id, time_slot_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Faculty,
    Classroom,
    /// Part of the persisted vocabulary; the checker never emits it.
    Time,
}

/// A collision between a candidate placement and accepted entries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictInfo {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub message: String,
    /// The pre-existing entries involved, never the candidate itself.
    pub related_entries: Vec<ScheduleEntry>,
}

impl fmt::Display for ConflictInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ConflictKind::Faculty => "faculty",
            ConflictKind::Classroom => "classroom",
            ConflictKind::Time => "time",
        };
        write!(f, "[{}] {}", kind, self.message)
    }
}

/// The complete input for the scheduling problem.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingInput {
    pub subjects: Vec<Subject>,
    pub faculty: Vec<Faculty>,
    pub classrooms: Vec<Classroom>,
    /// Defaults to the generated weekly grid when omitted.
    #[serde(default)]
    pub time_slots: Option<Vec<TimeSlot>>,
}

/// The final output of the solver.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingOutput {
    pub schedule: Vec<ScheduleEntry>,
    pub conflicts: Vec<ConflictInfo>,
}
