use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Kind of a punch entry. A day normally goes
/// `ClockIn -> BreakStart -> BreakEnd -> ClockOut`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum EntryType {
    ClockIn,
    BreakStart,
    BreakEnd,
    ClockOut,
}

impl EntryType {
    /// Parse the snake_case form (`clock_in`, `break_start`, ...).
    /// Dashes and case are tolerated, so `Clock-In` in a dataset loads too.
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "clock_in" => Some(Self::ClockIn),
            "break_start" => Some(Self::BreakStart),
            "break_end" => Some(Self::BreakEnd),
            "clock_out" => Some(Self::ClockOut),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EntryType::ClockIn => "clock_in",
            EntryType::BreakStart => "break_start",
            EntryType::BreakEnd => "break_end",
            EntryType::ClockOut => "clock_out",
        }
    }

    /// Human label for terminal output
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::ClockIn => "Clock in",
            EntryType::BreakStart => "Break start",
            EntryType::BreakEnd => "Break end",
            EntryType::ClockOut => "Clock out",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.et_as_str())
    }
}

impl TryFrom<String> for EntryType {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        EntryType::et_from_str(&s).ok_or(AppError::InvalidEntryType(s))
    }
}
