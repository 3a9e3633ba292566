//! Input validation for scheduling runs.
//!
//! Checks that every time string the scheduler will compare is well formed
//! and that ids are unique within each collection. Detects:
//! - Malformed `HH:MM` strings
//! - Slots that end at or before their start
//! - Duplicate IDs
//!
//! A subject whose faculty id resolves to nobody is deliberately NOT an error;
//! the scheduler skips it silently.

use crate::data::{Classroom, Faculty, Subject, TimeSlot};
use crate::time::to_minutes;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A time string is not `HH:MM`.
    MalformedTime,
    /// A slot's end is not after its start.
    EmptyInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the four scheduler inputs, collecting every problem found.
pub fn validate_input(
    subjects: &[Subject],
    faculty: &[Faculty],
    classrooms: &[Classroom],
    time_slots: &[TimeSlot],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique("time slot", time_slots.iter().map(|s| s.id.as_str()), &mut errors);
    check_unique("faculty", faculty.iter().map(|f| f.id.as_str()), &mut errors);
    check_unique("subject", subjects.iter().map(|s| s.id.as_str()), &mut errors);
    check_unique("classroom", classrooms.iter().map(|c| c.id.as_str()), &mut errors);

    for slot in time_slots {
        check_slot("time grid", slot, &mut errors);
    }
    for member in faculty {
        let owner = format!("faculty {}", member.id);
        for slot in &member.available_time_slots {
            check_slot(&owner, slot, &mut errors);
        }
        for slot in member.preferred_time_slots.iter().flatten() {
            check_slot(&owner, slot, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique<'a>(
    what: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {} ID: {}", what, id),
            ));
        }
    }
}

fn check_slot(owner: &str, slot: &TimeSlot, errors: &mut Vec<ValidationError>) {
    let start = to_minutes(&slot.start_time);
    let end = to_minutes(&slot.end_time);

    for (time, parsed) in [(&slot.start_time, &start), (&slot.end_time, &end)] {
        if parsed.is_err() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!("Slot {} in {} has malformed time {:?}", slot.id, owner, time),
            ));
        }
    }

    if let (Ok(start), Ok(end)) = (start, end) {
        if start >= end {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInterval,
                format!(
                    "Slot {} in {} ends ({}) before it starts ({})",
                    slot.id, owner, slot.end_time, slot.start_time
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Day;
    use crate::slots::generate_week_slots;

    fn slot(id: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            id: id.to_string(),
            day: Day::Monday,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn room(id: &str) -> Classroom {
        Classroom {
            id: id.to_string(),
            name: format!("Room {}", id),
            capacity: 30,
            room_type: None,
            building: None,
            floor: None,
        }
    }

    #[test]
    fn test_generated_grid_is_valid() {
        assert!(validate_input(&[], &[], &[], &generate_week_slots()).is_ok());
    }

    #[test]
    fn test_duplicate_classroom_id() {
        let errors = validate_input(&[], &[], &[room("1"), room("1")], &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("classroom"));
    }

    #[test]
    fn test_malformed_time_in_grid() {
        let errors = validate_input(&[], &[], &[], &[slot("1", "9am", "10:00")]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedTime));
    }

    #[test]
    fn test_inverted_slot() {
        let errors = validate_input(&[], &[], &[], &[slot("1", "10:00", "09:00")]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInterval);
    }

    #[test]
    fn test_malformed_preference_is_reported() {
        let member = Faculty {
            id: "F1".to_string(),
            name: "A".to_string(),
            department: "CS".to_string(),
            available_time_slots: vec![],
            preferred_time_slots: Some(vec![slot("7", "09:00", "xx")]),
        };
        let errors = validate_input(&[], &[member], &[], &[]).unwrap_err();
        assert!(errors[0].message.contains("faculty F1"));
    }

    #[test]
    fn test_collects_all_errors() {
        let grid = [slot("1", "bad", "10:00"), slot("1", "10:00", "10:00")];
        let errors = validate_input(&[], &[], &[room("1"), room("1")], &grid).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
