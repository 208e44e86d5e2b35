use crate::models::entry::find_first;
use crate::models::{EntryType, PunchEntry};
use chrono::NaiveDateTime;

fn ms_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_milliseconds()
}

/// Presence in milliseconds for one day, break time excluded.
///
/// Only the first entry of each type is considered. Open segments
/// (still in the morning, or back from the break) run until `now`;
/// an ongoing break is not counted.
pub fn calculate_presence_time(entries: &[PunchEntry], now: NaiveDateTime) -> i64 {
    let Some(clock_in) = find_first(entries, EntryType::ClockIn) else {
        return 0;
    };

    let break_start = find_first(entries, EntryType::BreakStart);
    let break_end = find_first(entries, EntryType::BreakEnd);
    let clock_out = find_first(entries, EntryType::ClockOut);

    let presence = match (clock_out, break_start, break_end) {
        (Some(out), Some(bs), Some(be)) => {
            ms_between(clock_in.timestamp, out.timestamp) - ms_between(bs.timestamp, be.timestamp)
        }
        (Some(out), _, _) => ms_between(clock_in.timestamp, out.timestamp),
        (None, Some(bs), Some(be)) => {
            ms_between(clock_in.timestamp, bs.timestamp) + ms_between(be.timestamp, now)
        }
        (None, Some(bs), None) => ms_between(clock_in.timestamp, bs.timestamp),
        (None, None, _) => ms_between(clock_in.timestamp, now),
    };

    presence.max(0)
}
