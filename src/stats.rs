//! Summary figures and free-resource reports over a finished schedule.

use crate::data::{Classroom, Day, Faculty, ScheduleEntry};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashSet;

/// Headline counts for a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub faculty: usize,
    pub subjects: usize,
    pub classrooms: usize,
    pub scheduled_faculty: usize,
    pub scheduled_subjects: usize,
    pub classrooms_in_use: usize,
    /// Share of subjects placed, rounded to a whole percent.
    pub utilization_percent: u32,
}

pub fn dashboard_stats(
    faculty_count: usize,
    subject_count: usize,
    classroom_count: usize,
    schedule: &[ScheduleEntry],
) -> DashboardStats {
    let scheduled_subjects = schedule.iter().map(|e| &e.subject_id).unique().count();
    let utilization_percent = if subject_count > 0 {
        (scheduled_subjects as f64 / subject_count as f64 * 100.0).round() as u32
    } else {
        0
    };

    DashboardStats {
        faculty: faculty_count,
        subjects: subject_count,
        classrooms: classroom_count,
        scheduled_faculty: schedule.iter().map(|e| &e.faculty_id).unique().count(),
        scheduled_subjects,
        classrooms_in_use: schedule.iter().map(|e| &e.classroom_id).unique().count(),
        utilization_percent,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub day: Day,
    /// `HH:MM-HH:MM` ranges the member is not teaching in.
    pub free_ranges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialAvailability {
    pub faculty_id: String,
    pub name: String,
    pub days: Vec<DayAvailability>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyClassrooms {
    pub day: Day,
    pub range: String,
    pub classroom_ids: Vec<String>,
}

/// Who and what is still free, measured against the ranges the schedule uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeResources {
    pub unscheduled_faculty: Vec<String>,
    pub partially_available: Vec<PartialAvailability>,
    pub empty_classrooms: Vec<EmptyClassrooms>,
}

/// Reports faculty with no classes, faculty with gaps, and empty rooms.
///
/// Only weekdays that appear in the schedule and time ranges that appear in
/// it are considered; ranges sort by start time.
pub fn free_resources(
    faculty: &[Faculty],
    classrooms: &[Classroom],
    schedule: &[ScheduleEntry],
) -> FreeResources {
    let used_days: HashSet<Day> = schedule.iter().map(|e| e.day).collect();
    let active_days: Vec<Day> = Day::WEEKDAYS
        .into_iter()
        .filter(|d| used_days.contains(d))
        .collect();
    let ranges: Vec<String> = schedule
        .iter()
        .map(range_of)
        .unique()
        .sorted()
        .collect();

    let teaching: HashSet<&str> = schedule.iter().map(|e| e.faculty_id.as_str()).collect();
    let unscheduled_faculty = faculty
        .iter()
        .filter(|f| !teaching.contains(f.id.as_str()))
        .map(|f| f.id.clone())
        .collect();

    let total_cells = active_days.len() * ranges.len();
    let partially_available = faculty
        .iter()
        .filter(|f| teaching.contains(f.id.as_str()))
        .filter(|f| schedule.iter().filter(|e| e.faculty_id == f.id).count() != total_cells)
        .map(|f| PartialAvailability {
            faculty_id: f.id.clone(),
            name: f.name.clone(),
            days: active_days
                .iter()
                .map(|&day| {
                    let busy: HashSet<String> = schedule
                        .iter()
                        .filter(|e| e.faculty_id == f.id && e.day == day)
                        .map(range_of)
                        .collect();
                    DayAvailability {
                        day,
                        free_ranges: ranges.iter().filter(|r| !busy.contains(*r)).cloned().collect(),
                    }
                })
                .filter(|d| !d.free_ranges.is_empty())
                .collect(),
        })
        .collect();

    let empty_classrooms = active_days
        .iter()
        .cartesian_product(ranges.iter())
        .map(|(&day, range)| {
            let busy: HashSet<&str> = schedule
                .iter()
                .filter(|e| e.day == day && range_of(e) == *range)
                .map(|e| e.classroom_id.as_str())
                .collect();
            EmptyClassrooms {
                day,
                range: range.clone(),
                classroom_ids: classrooms
                    .iter()
                    .filter(|c| !busy.contains(c.id.as_str()))
                    .map(|c| c.id.clone())
                    .collect(),
            }
        })
        .collect();

    FreeResources {
        unscheduled_faculty,
        partially_available,
        empty_classrooms,
    }
}

fn range_of(entry: &ScheduleEntry) -> String {
    format!("{}-{}", entry.start_time, entry.end_time)
}
