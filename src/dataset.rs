//! Read-only input dataset handed to the engine by an external system.

use crate::errors::{AppError, AppResult};
use crate::models::{Project, ProjectSession, PunchEntry};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Entries, sessions and projects as exported by the storage layer.
/// Each list may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default)]
    pub entries: Vec<PunchEntry>,
    #[serde(default)]
    pub sessions: Vec<ProjectSession>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Dataset {
    /// Load a JSON dataset, or YAML when the extension is `.yml`/`.yaml`.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::DatasetNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );

        let mut data: Dataset = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        // presence calculation reads the first entry of each type
        data.entries.sort_by_key(|e| e.timestamp);

        info!(
            path = %path.display(),
            entries = data.entries.len(),
            sessions = data.sessions.len(),
            projects = data.projects.len(),
            "dataset loaded"
        );
        Ok(data)
    }

    /// Reject records the engine must not see: sessions ending before they
    /// start, and anything stamped after `now`.
    pub fn validate(&self, now: NaiveDateTime) -> AppResult<()> {
        if let Some(e) = self.entries.iter().find(|e| e.timestamp > now) {
            return Err(AppError::InvalidEntry(format!(
                "{} at {} is after {}",
                e.kind, e.timestamp, now
            )));
        }

        for s in &self.sessions {
            if s.start_time > now {
                return Err(AppError::InvalidSession(format!(
                    "{} starts at {}, after {}",
                    s.id, s.start_time, now
                )));
            }

            if let Some(end) = s.end_time {
                if end < s.start_time {
                    return Err(AppError::InvalidSession(format!(
                        "{} ends at {} before its start {}",
                        s.id, end, s.start_time
                    )));
                }
                if end > now {
                    return Err(AppError::InvalidSession(format!(
                        "{} ends at {}, after {}",
                        s.id, end, now
                    )));
                }
            }
        }

        debug!(%now, "dataset validated");
        Ok(())
    }

    /// The day's entries and sessions.
    pub fn for_date(&self, date: chrono::NaiveDate) -> (Vec<PunchEntry>, Vec<ProjectSession>) {
        let entries = crate::models::entry::entries_for_date(&self.entries, date);
        let sessions = crate::models::session::sessions_for_date(&self.sessions, date);
        debug!(%date, entries = entries.len(), sessions = sessions.len(), "day selected");
        (entries, sessions)
    }
}
