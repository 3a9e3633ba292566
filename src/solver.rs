use crate::conflict::find_conflicts;
use crate::data::{
    Classroom, ConflictInfo, Faculty, FacultyId, ScheduleEntry, SchedulingInput,
    SchedulingOutput, Subject, SubjectId, TimeSlot,
};
use crate::error::{SolveError, TimeResult};
use crate::slots::generate_week_slots;
use crate::validation::validate_input;
use itertools::Itertools;
use log::{debug, info, trace, warn};
use std::collections::HashMap;
use std::time::Instant;

/// What happened to one subject during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Placed(ScheduleEntry),
    /// The subject's faculty id matched nobody.
    SkippedNoFaculty,
    /// Every (slot, classroom) pair collided. Holds the conflicts collected
    /// while trying, which may be empty when no slot or room was eligible.
    Unplaceable(Vec<ConflictInfo>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectOutcome {
    pub subject_id: SubjectId,
    pub placement: Placement,
}

/// Full result of a run: per-subject outcomes plus the two flat collections
/// callers persist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleRun {
    pub outcomes: Vec<SubjectOutcome>,
    pub schedule: Vec<ScheduleEntry>,
    /// Every conflict met on every rejected pair, including pairs tried for
    /// subjects that were placed later on another pair.
    pub conflicts: Vec<ConflictInfo>,
}

impl ScheduleRun {
    pub fn outcome(&self, subject_id: &str) -> Option<&Placement> {
        self.outcomes
            .iter()
            .find(|o| o.subject_id == subject_id)
            .map(|o| &o.placement)
    }

    pub fn into_output(self) -> SchedulingOutput {
        SchedulingOutput {
            schedule: self.schedule,
            conflicts: self.conflicts,
        }
    }
}

/// Greedy first-fit placement of `subjects` into (slot, classroom) pairs.
///
/// Subjects are handled in input order. For each one the faculty's preferred
/// slots are tried first, then the rest of their availability (or the whole
/// `time_slots` grid when availability is empty); classrooms are scanned
/// inside each slot. Every candidate is checked against the entries accepted
/// so far, so earlier placements constrain later ones. There is no
/// backtracking.
///
/// `duration` is not consulted: every subject takes exactly one slot.
///
/// Fails only if a time string cannot be parsed; run [`validate_input`] first
/// to rule that out.
pub fn schedule(
    subjects: &[Subject],
    faculty: &[Faculty],
    classrooms: &[Classroom],
    time_slots: &[TimeSlot],
) -> TimeResult<ScheduleRun> {
    let start_time = Instant::now();
    info!(
        "Scheduling {} subjects across {} classrooms and {} timeslots...",
        subjects.len(),
        classrooms.len(),
        time_slots.len()
    );

    // first match wins on duplicate ids
    let mut faculty_map: HashMap<&FacultyId, &Faculty> = HashMap::new();
    for member in faculty {
        faculty_map.entry(&member.id).or_insert(member);
    }

    let mut run = ScheduleRun::default();

    for subject in subjects {
        let Some(member) = faculty_map.get(&subject.faculty_id) else {
            warn!(
                "Skipping subject {} ({}): faculty {} not found",
                subject.id, subject.code, subject.faculty_id
            );
            run.outcomes.push(SubjectOutcome {
                subject_id: subject.id.clone(),
                placement: Placement::SkippedNoFaculty,
            });
            continue;
        };

        let slots = prioritized_slots(member, time_slots);
        let rooms = eligible_classrooms(subject, classrooms);
        let mut attempted = Vec::new();
        let mut placed = None;

        'slots: for slot in &slots {
            for room in &rooms {
                let candidate = ScheduleEntry::new(&subject.id, &member.id, &room.id, slot);
                let conflicts = find_conflicts(&candidate, &run.schedule)?;
                if conflicts.is_empty() {
                    placed = Some(candidate);
                    break 'slots;
                }
                attempted.extend(conflicts);
            }
        }

        run.conflicts.extend(attempted.iter().cloned());
        let placement = match placed {
            Some(entry) => {
                trace!(
                    "Placed subject {} in classroom {} at {} {}-{}",
                    subject.id, entry.classroom_id, entry.day, entry.start_time, entry.end_time
                );
                run.schedule.push(entry.clone());
                Placement::Placed(entry)
            }
            None => {
                debug!(
                    "Subject {} could not be placed after {} conflicts",
                    subject.id,
                    attempted.len()
                );
                Placement::Unplaceable(attempted)
            }
        };
        run.outcomes.push(SubjectOutcome {
            subject_id: subject.id.clone(),
            placement,
        });
    }

    info!(
        "Placed {}/{} subjects with {} recorded conflicts in {:.2?}",
        run.schedule.len(),
        subjects.len(),
        run.conflicts.len(),
        start_time.elapsed()
    );
    Ok(run)
}

/// Validates `input` and schedules it, defaulting the grid to the generated week.
pub fn solve(input: &SchedulingInput) -> Result<SchedulingOutput, SolveError> {
    let generated;
    let time_slots = match &input.time_slots {
        Some(slots) => slots.as_slice(),
        None => {
            generated = generate_week_slots();
            generated.as_slice()
        }
    };

    validate_input(&input.subjects, &input.faculty, &input.classrooms, time_slots)
        .map_err(SolveError::InvalidInput)?;

    let run = schedule(&input.subjects, &input.faculty, &input.classrooms, time_slots)?;
    Ok(run.into_output())
}

// preferred first, then the remaining availability; each slot id once
fn prioritized_slots<'a>(member: &'a Faculty, grid: &'a [TimeSlot]) -> Vec<&'a TimeSlot> {
    let available = if member.available_time_slots.is_empty() {
        grid
    } else {
        member.available_time_slots.as_slice()
    };
    let preferred = member.preferred_time_slots.as_deref().unwrap_or_default();

    preferred
        .iter()
        .chain(available)
        .unique_by(|slot| slot.id.clone())
        .collect()
}

// typed subjects need an exact type match; untyped ones take any room
fn eligible_classrooms<'a>(subject: &Subject, classrooms: &'a [Classroom]) -> Vec<&'a Classroom> {
    match &subject.required_room_type {
        Some(required) => classrooms
            .iter()
            .filter(|room| room.room_type.as_ref() == Some(required))
            .collect(),
        None => classrooms.iter().collect(),
    }
}
