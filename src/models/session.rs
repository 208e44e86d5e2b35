use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A contiguous interval of work attributed to one project.
/// `end_time == None` means the session is still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSession {
    pub id: String,
    pub project_id: String,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
}

impl ProjectSession {
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            start_time,
            end_time,
        }
    }

    pub fn is_running(&self) -> bool {
        self.end_time.is_none()
    }

    /// Calendar day of the session start.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// End of the interval; an open session ends at `now`.
    pub fn effective_end(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.end_time.unwrap_or(now)
    }

    /// Duration in milliseconds. Open sessions are measured up to `now`,
    /// recomputed on every call.
    pub fn duration_ms(&self, now: NaiveDateTime) -> i64 {
        (self.effective_end(now) - self.start_time).num_milliseconds()
    }
}

pub fn sessions_for_date(sessions: &[ProjectSession], date: NaiveDate) -> Vec<ProjectSession> {
    sessions
        .iter()
        .filter(|s| s.date() == date)
        .cloned()
        .collect()
}
