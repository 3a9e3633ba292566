//! # timetable_solver
//!
//! Assigns subjects to faculty, classrooms and weekly time slots without
//! double-booking anyone or anything.
//!
//! ## Modules
//!
//! - [`time`]: `HH:MM` arithmetic and the interval overlap test
//! - [`conflict`]: faculty and classroom double-booking detection
//! - [`slots`]: the canonical Monday-Friday grid
//! - [`solver`]: greedy first-fit scheduler
//! - [`validation`]: input checks run before scheduling
//! - [`stats`]: utilisation figures and free-resource reports
//! - [`storage`]: whole-collection persistence
//! - [`server`]: HTTP API
//! - [`error`]: Error types

pub mod config;
pub mod conflict;
pub mod data;
pub mod error;
pub mod sample;
pub mod server;
pub mod slots;
pub mod solver;
pub mod stats;
pub mod storage;
pub mod time;
pub mod validation;

pub use conflict::find_conflicts;
pub use data::{
    Classroom, ConflictInfo, ConflictKind, Day, Faculty, ScheduleEntry, SchedulingInput,
    SchedulingOutput, Subject, TimeSlot,
};
pub use error::{SolveError, StorageError, TimeError};
pub use slots::generate_week_slots;
pub use solver::{Placement, ScheduleRun, schedule, solve};
pub use time::{Interval, overlap, to_minutes, to_time_string};
