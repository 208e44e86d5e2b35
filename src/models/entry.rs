use super::entry_type::EntryType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single punch: a timestamped clock-in, break marker or clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEntry {
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub timestamp: NaiveDateTime,
}

impl PunchEntry {
    pub fn new(kind: EntryType, timestamp: NaiveDateTime) -> Self {
        Self { kind, timestamp }
    }

    /// Calendar day the entry belongs to, always derived from the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// First entry of the given kind, in slice order.
pub fn find_first(entries: &[PunchEntry], kind: EntryType) -> Option<&PunchEntry> {
    entries.iter().find(|e| e.kind == kind)
}

/// Entries whose calendar day is `date`, keeping their order.
pub fn entries_for_date(entries: &[PunchEntry], date: NaiveDate) -> Vec<PunchEntry> {
    entries
        .iter()
        .filter(|e| e.date() == date)
        .cloned()
        .collect()
}
