use crate::core::calculator::{overlap, presence, projects, status, target};
use crate::core::clock::{Clock, SystemClock};
use crate::models::stats::{DaySummary, ProjectStat, SessionOverlap};
use crate::models::{DayStatus, EntryType, Project, ProjectSession, PunchEntry};
use chrono::{NaiveDate, NaiveDateTime};

/// Single-day calculations bound to a clock and a daily target.
///
/// Holds no state about entries: every call recomputes from the slice it
/// is given, so a host may call it once per second to show a live counter.
#[derive(Debug, Clone)]
pub struct PresenceCalculator<C: Clock = SystemClock> {
    clock: C,
    target_ms: i64,
}

impl Default for PresenceCalculator<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> PresenceCalculator<C> {
    pub fn new(clock: C) -> Self {
        Self::with_target(clock, target::DAILY_TARGET_MS)
    }

    pub fn with_target(clock: C, target_ms: i64) -> Self {
        Self { clock, target_ms }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn target(&self) -> i64 {
        self.target_ms
    }

    pub fn calculate_presence_time(&self, entries: &[PunchEntry]) -> i64 {
        presence::calculate_presence_time(entries, self.now())
    }

    pub fn get_day_status(&self, entries: &[PunchEntry]) -> DayStatus {
        status::get_day_status(entries)
    }

    pub fn get_next_expected_entry(&self, entries: &[PunchEntry]) -> Option<EntryType> {
        status::get_next_expected_entry(entries)
    }

    pub fn get_remaining_time(&self, duration: i64) -> i64 {
        target::remaining_time(duration, self.target_ms)
    }

    pub fn is_work_day_complete(&self, duration: i64) -> bool {
        target::is_work_day_complete(duration, self.target_ms)
    }

    pub fn get_completion_percentage(&self, duration: i64) -> i64 {
        target::completion_percentage(duration, self.target_ms)
    }

    pub fn session_duration(&self, session: &ProjectSession) -> i64 {
        session.duration_ms(self.now())
    }

    pub fn total_session_time(&self, sessions: &[ProjectSession]) -> i64 {
        projects::total_session_time(sessions, self.now())
    }

    pub fn calculate_project_stats(
        &self,
        sessions: &[ProjectSession],
        projects: &[Project],
    ) -> Vec<ProjectStat> {
        projects::calculate_project_stats(sessions, projects, self.now())
    }

    pub fn find_session_overlaps(&self, sessions: &[ProjectSession]) -> Vec<SessionOverlap> {
        overlap::find_session_overlaps(sessions, self.now())
    }

    pub fn has_overlap(&self, sessions: &[ProjectSession]) -> bool {
        overlap::has_overlap(sessions, self.now())
    }

    /// Bundle the single-day figures for `date`. Inputs are expected to be
    /// already filtered to that day.
    pub fn get_day_summary(
        &self,
        date: NaiveDate,
        entries: &[PunchEntry],
        sessions: &[ProjectSession],
        projects: &[Project],
    ) -> DaySummary {
        // one reading of the clock for the whole summary
        let now = self.now();
        let presence_time = presence::calculate_presence_time(entries, now);
        let status = status::get_day_status(entries);

        DaySummary {
            date,
            status,
            next_expected: status.next_expected(),
            presence_time,
            project_time: projects::total_session_time(sessions, now),
            remaining_time: target::remaining_time(presence_time, self.target_ms),
            completion_percentage: target::completion_percentage(presence_time, self.target_ms),
            is_complete: target::is_work_day_complete(presence_time, self.target_ms),
            project_stats: projects::calculate_project_stats(sessions, projects, now),
        }
    }
}
