use crate::core::calculator::target::percentage_of;
use crate::models::project::project_label;
use crate::models::stats::ProjectStat;
use crate::models::{Project, ProjectSession};
use chrono::NaiveDateTime;

/// Sessions of one project, in the order they were first met.
pub(crate) struct ProjectGroup<'a> {
    pub project_id: &'a str,
    pub sessions: Vec<&'a ProjectSession>,
}

pub(crate) fn group_by_project(sessions: &[ProjectSession]) -> Vec<ProjectGroup<'_>> {
    let mut groups: Vec<ProjectGroup<'_>> = Vec::new();

    for s in sessions {
        match groups.iter_mut().find(|g| g.project_id == s.project_id) {
            Some(g) => g.sessions.push(s),
            None => groups.push(ProjectGroup {
                project_id: &s.project_id,
                sessions: vec![s],
            }),
        }
    }

    groups
}

/// Sum of all session durations.
pub fn total_session_time(sessions: &[ProjectSession], now: NaiveDateTime) -> i64 {
    sessions.iter().map(|s| s.duration_ms(now)).sum()
}

/// Per-project totals, sorted by duration (largest first).
/// Ties keep the order in which the projects first appear.
pub fn calculate_project_stats(
    sessions: &[ProjectSession],
    projects: &[Project],
    now: NaiveDateTime,
) -> Vec<ProjectStat> {
    let groups = group_by_project(sessions);
    let total = total_session_time(sessions, now);

    let mut stats: Vec<ProjectStat> = groups
        .iter()
        .map(|g| {
            let duration: i64 = g.sessions.iter().map(|s| s.duration_ms(now)).sum();
            let session_count = g.sessions.len();
            let (project_name, project_color) = project_label(projects, g.project_id);

            ProjectStat {
                project_id: g.project_id.to_string(),
                project_name,
                project_color,
                duration,
                percentage: percentage_of(duration, total),
                session_count,
                average_session_duration: duration / session_count as i64,
                is_running: g.sessions.iter().any(|s| s.is_running()),
            }
        })
        .collect();

    // sort_by is stable
    stats.sort_by(|a, b| b.duration.cmp(&a.duration));
    stats
}
