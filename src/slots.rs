//! The canonical weekly grid: one-hour slots, Monday to Friday, 08:00-18:00.

use crate::data::{Day, TimeSlot};

pub const FIRST_HOUR: u32 = 8;
pub const LAST_HOUR: u32 = 18;
pub const SLOTS_PER_DAY: usize = (LAST_HOUR - FIRST_HOUR) as usize;

/// Generates the 50-slot week. Ids run `"1"..="50"` in day-major,
/// hour-minor order and are identical on every call.
pub fn generate_week_slots() -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(Day::WEEKDAYS.len() * SLOTS_PER_DAY);
    let mut id = 1;

    for day in Day::WEEKDAYS {
        for hour in FIRST_HOUR..LAST_HOUR {
            slots.push(TimeSlot {
                id: id.to_string(),
                day,
                start_time: format!("{:02}:00", hour),
                end_time: format!("{:02}:00", hour + 1),
            });
            id += 1;
        }
    }

    slots
}
