use super::entry_type::EntryType;
use serde::Serialize;

/// Where a working day stands, derived from the entry types present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    NotStarted,
    Morning,
    Lunch,
    Afternoon,
    Completed,
}

impl DayStatus {
    /// The single action allowed next. Completed days accept nothing.
    pub fn next_expected(&self) -> Option<EntryType> {
        match self {
            DayStatus::NotStarted => Some(EntryType::ClockIn),
            DayStatus::Morning => Some(EntryType::BreakStart),
            DayStatus::Lunch => Some(EntryType::BreakEnd),
            DayStatus::Afternoon => Some(EntryType::ClockOut),
            DayStatus::Completed => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::NotStarted => "not_started",
            DayStatus::Morning => "morning",
            DayStatus::Lunch => "lunch",
            DayStatus::Afternoon => "afternoon",
            DayStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::NotStarted => "Not started",
            DayStatus::Morning => "Morning",
            DayStatus::Lunch => "Lunch break",
            DayStatus::Afternoon => "Afternoon",
            DayStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
