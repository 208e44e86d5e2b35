//! Period boundaries (week / month), date ranges and period statistics.

use crate::core::calculator::presence::calculate_presence_time;
use crate::core::calculator::projects::{calculate_project_stats, total_session_time};
use crate::core::clock::Clock;
use crate::core::logic::PresenceCalculator;
use crate::models::entry::entries_for_date;
use crate::models::session::sessions_for_date;
use crate::models::stats::{
    DayStats, IncompleteDay, PeriodInfo, PeriodProjectStat, PeriodStats, TimeTotals,
};
use crate::models::{Project, ProjectSession, PunchEntry};
use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Monday of the week containing `date`. A Sunday closes the previous
/// week, so it maps to the Monday six days earlier.
pub fn get_week_start(date: NaiveDate) -> NaiveDate {
    // 0 = Sunday .. 6 = Saturday
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = if weekday == 0 { -6 } else { 1 - weekday };

    date.checked_add_signed(TimeDelta::days(offset)).unwrap_or(date)
}

/// Sunday closing the week containing `date`.
pub fn get_week_end(date: NaiveDate) -> NaiveDate {
    let start = get_week_start(date);
    start.checked_add_days(Days::new(6)).unwrap_or(start)
}

pub fn get_month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn get_month_end(date: NaiveDate) -> NaiveDate {
    let first = get_month_start(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Inclusive, day-by-day range. Lazy; clone it to iterate again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt();
        Some(current)
    }
}

/// Empty when `start > end`.
pub fn generate_date_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        next: Some(start),
        end,
    }
}

/// Inputs of a period computation. Entries and sessions may cover more
/// than the period; only those dated inside it are counted.
#[derive(Debug, Clone, Copy)]
pub struct PeriodQuery<'a> {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub entries: &'a [PunchEntry],
    pub sessions: &'a [ProjectSession],
    pub projects: &'a [Project],
}

fn average(total: i64, days: usize) -> i64 {
    if days == 0 {
        return 0;
    }
    (total as f64 / days as f64).round() as i64
}

pub struct PeriodAggregator<'c, C: Clock> {
    calculator: &'c PresenceCalculator<C>,
}

impl<'c, C: Clock> PeriodAggregator<'c, C> {
    pub fn new(calculator: &'c PresenceCalculator<C>) -> Self {
        Self { calculator }
    }

    pub fn calculate_period_stats(&self, query: PeriodQuery<'_>) -> PeriodStats {
        let calc = self.calculator;
        let now = calc.now();
        let range = generate_date_range(query.start_date, query.end_date);

        debug!(
            start = %query.start_date,
            end = %query.end_date,
            entries = query.entries.len(),
            sessions = query.sessions.len(),
            "computing period stats"
        );

        let mut daily_stats = Vec::new();
        let mut period_sessions = Vec::new();

        for date in range {
            let day_entries = entries_for_date(query.entries, date);
            let day_sessions = sessions_for_date(query.sessions, date);

            let presence_time = calculate_presence_time(&day_entries, now);
            let project_time = total_session_time(&day_sessions, now);

            trace!(%date, presence_time, project_time, "day computed");

            daily_stats.push(DayStats {
                date,
                presence_time,
                project_time,
                is_complete: calc.is_work_day_complete(presence_time),
                has_entries: !day_entries.is_empty(),
            });
            period_sessions.extend(day_sessions);
        }

        let worked_days = daily_stats.iter().filter(|d| d.has_entries).count();
        let complete_days = daily_stats.iter().filter(|d| d.is_complete).count();

        let incomplete_days_list: Vec<IncompleteDay> = daily_stats
            .iter()
            .filter(|d| d.has_entries && !d.is_complete)
            .map(|d| IncompleteDay {
                date: d.date,
                presence_time: d.presence_time,
                missing_time: calc.get_remaining_time(d.presence_time),
            })
            .collect();

        let total_presence: i64 = daily_stats.iter().map(|d| d.presence_time).sum();
        let total_project: i64 = daily_stats.iter().map(|d| d.project_time).sum();

        let project_stats = calculate_project_stats(&period_sessions, query.projects, now)
            .into_iter()
            .map(|stat| {
                let mut daily_durations: BTreeMap<NaiveDate, i64> = BTreeMap::new();
                for s in period_sessions.iter().filter(|s| s.project_id == stat.project_id) {
                    *daily_durations.entry(s.date()).or_insert(0) += s.duration_ms(now);
                }
                PeriodProjectStat {
                    stat,
                    daily_durations,
                }
            })
            .collect();

        PeriodStats {
            period: PeriodInfo {
                start_date: query.start_date,
                end_date: query.end_date,
                total_days: daily_stats.len(),
                worked_days,
                complete_days,
                incomplete_days: incomplete_days_list.len(),
            },
            time: TimeTotals {
                total_presence,
                total_project,
                average_presence_per_day: average(total_presence, worked_days),
                average_project_per_day: average(total_project, worked_days),
            },
            daily_stats,
            project_stats,
            incomplete_days_list,
        }
    }

    /// Stats for the Monday-Sunday week around `date`.
    pub fn week_stats(
        &self,
        date: NaiveDate,
        entries: &[PunchEntry],
        sessions: &[ProjectSession],
        projects: &[Project],
    ) -> PeriodStats {
        self.calculate_period_stats(PeriodQuery {
            start_date: get_week_start(date),
            end_date: get_week_end(date),
            entries,
            sessions,
            projects,
        })
    }

    /// Stats for the calendar month around `date`.
    pub fn month_stats(
        &self,
        date: NaiveDate,
        entries: &[PunchEntry],
        sessions: &[ProjectSession],
        projects: &[Project],
    ) -> PeriodStats {
        self.calculate_period_stats(PeriodQuery {
            start_date: get_month_start(date),
            end_date: get_month_end(date),
            entries,
            sessions,
            projects,
        })
    }
}
