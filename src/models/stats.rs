//! Output structures of the calculator and the period aggregator.
//! All durations are integer milliseconds.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub presence_time: i64,
    pub project_time: i64,
    pub is_complete: bool,
    pub has_entries: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStat {
    pub project_id: String,
    pub project_name: String,
    pub project_color: String,
    pub duration: i64,
    pub percentage: i64,
    pub session_count: usize,
    pub average_session_duration: i64,
    pub is_running: bool,
}

/// Project statistics over a period, with the per-day breakdown
/// (date -> that project's duration on that day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodProjectStat {
    #[serde(flatten)]
    pub stat: ProjectStat,
    pub daily_durations: BTreeMap<NaiveDate, i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodInfo {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: usize,
    pub worked_days: usize,
    pub complete_days: usize,
    pub incomplete_days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeTotals {
    pub total_presence: i64,
    pub total_project: i64,
    pub average_presence_per_day: i64,
    pub average_project_per_day: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompleteDay {
    pub date: NaiveDate,
    pub presence_time: i64,
    pub missing_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodStats {
    pub period: PeriodInfo,
    pub time: TimeTotals,
    pub daily_stats: Vec<DayStats>,
    pub project_stats: Vec<PeriodProjectStat>,
    pub incomplete_days_list: Vec<IncompleteDay>,
}

/// Everything the host needs to show a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub status: super::day_status::DayStatus,
    pub next_expected: Option<super::entry_type::EntryType>,
    pub presence_time: i64,
    pub project_time: i64,
    pub remaining_time: i64,
    pub completion_percentage: i64,
    pub is_complete: bool,
    pub project_stats: Vec<ProjectStat>,
}

/// Intersection of two sessions on different projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOverlap {
    pub first_session_id: String,
    pub second_session_id: String,
    pub first_project_id: String,
    pub second_project_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration: i64,
}
