//! Demo data set: three faculty, five subjects, four classrooms.

use crate::data::{Classroom, Day, Faculty, Subject, TimeSlot};
use crate::slots::generate_week_slots;

#[derive(Debug, Clone)]
pub struct SampleData {
    pub faculty: Vec<Faculty>,
    pub subjects: Vec<Subject>,
    pub classrooms: Vec<Classroom>,
    pub time_slots: Vec<TimeSlot>,
}

pub fn sample_data() -> SampleData {
    let grid = generate_week_slots();

    let faculty = vec![
        Faculty {
            id: "1".to_string(),
            name: "Dr. Jane Smith".to_string(),
            department: "Computer Science".to_string(),
            // no Friday afternoons
            available_time_slots: slots_where(&grid, |s| {
                s.day != Day::Friday || starts_before(s, "15:00")
            }),
            preferred_time_slots: None,
        },
        Faculty {
            id: "2".to_string(),
            name: "Prof. John Davis".to_string(),
            department: "Mathematics".to_string(),
            available_time_slots: grid.clone(),
            preferred_time_slots: Some(slots_where(&grid, |s| {
                matches!(s.day, Day::Monday | Day::Wednesday)
            })),
        },
        Faculty {
            id: "3".to_string(),
            name: "Dr. Emily Brown".to_string(),
            department: "Physics".to_string(),
            available_time_slots: slots_where(&grid, |s| !starts_before(s, "10:00")),
            preferred_time_slots: None,
        },
    ];

    let subjects = vec![
        subject("1", "Introduction to Programming", "CS101", "1", 60, Some("computer-lab")),
        subject("2", "Data Structures", "CS201", "1", 90, None),
        subject("3", "Calculus I", "MTH101", "2", 60, None),
        subject("4", "Linear Algebra", "MTH202", "2", 60, None),
        subject("5", "Classical Mechanics", "PHY201", "3", 90, Some("lab")),
    ];

    let classrooms = vec![
        classroom("1", "Room 101", 30, None, "Engineering", 1),
        classroom("2", "Room 205", 45, None, "Science", 2),
        classroom("3", "Computer Lab 1", 25, Some("computer-lab"), "Engineering", 1),
        classroom("4", "Physics Lab", 20, Some("lab"), "Science", 1),
    ];

    SampleData {
        faculty,
        subjects,
        classrooms,
        time_slots: grid,
    }
}

fn slots_where(grid: &[TimeSlot], keep: impl Fn(&TimeSlot) -> bool) -> Vec<TimeSlot> {
    grid.iter().filter(|s| keep(s)).cloned().collect()
}

// times are zero-padded, so lexical order is chronological
fn starts_before(slot: &TimeSlot, time: &str) -> bool {
    slot.start_time.as_str() < time
}

fn subject(
    id: &str,
    name: &str,
    code: &str,
    faculty_id: &str,
    duration: u32,
    room_type: Option<&str>,
) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        faculty_id: faculty_id.to_string(),
        duration,
        required_room_type: room_type.map(str::to_string),
    }
}

fn classroom(
    id: &str,
    name: &str,
    capacity: u32,
    room_type: Option<&str>,
    building: &str,
    floor: i32,
) -> Classroom {
    Classroom {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        room_type: room_type.map(str::to_string),
        building: Some(building.to_string()),
        floor: Some(floor),
    }
}
