use crate::models::{DayStatus, EntryType, PunchEntry};

fn has(entries: &[PunchEntry], kind: EntryType) -> bool {
    entries.iter().any(|e| e.kind == kind)
}

/// Classify a day from the entry types it contains.
/// Order and timestamps are ignored, so any snapshot of the day's
/// entries yields the same status.
pub fn get_day_status(entries: &[PunchEntry]) -> DayStatus {
    if has(entries, EntryType::ClockOut) {
        DayStatus::Completed
    } else if has(entries, EntryType::BreakEnd) {
        DayStatus::Afternoon
    } else if has(entries, EntryType::BreakStart) {
        DayStatus::Lunch
    } else if has(entries, EntryType::ClockIn) {
        DayStatus::Morning
    } else {
        DayStatus::NotStarted
    }
}

pub fn get_next_expected_entry(entries: &[PunchEntry]) -> Option<EntryType> {
    get_day_status(entries).next_expected()
}
