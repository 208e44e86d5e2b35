use crate::cli::{Context, print_json};
use crate::errors::AppResult;
use crate::models::stats::{DaySummary, ProjectStat};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_remaining, color_for_status};
use crate::utils::date::{date_or, weekday_short};
use crate::utils::formatting::{percent, pad_left};
use crate::utils::ms2readable;
use crate::utils::table::{Column, Table};
use tracing::debug;

pub fn handle(date: Option<&String>, ctx: &Context) -> AppResult<()> {
    let date = date_or(date, ctx.today())?;
    let data = ctx.dataset()?;
    let (entries, sessions) = data.for_date(date);

    let summary = ctx
        .calculator
        .get_day_summary(date, &entries, &sessions, &data.projects);
    debug!(%date, status = %summary.status, presence = summary.presence_time, "day summary");

    if ctx.json {
        return print_json(&summary);
    }

    let title = if ctx.cfg.show_weekday {
        format!("{} ({})", date, weekday_short(date))
    } else {
        date.to_string()
    };
    header(title);

    if entries.is_empty() {
        println!("No entries for {}", date);
    } else {
        for e in &entries {
            println!("  {}  {}", e.time_str(), e.kind.label());
        }
        println!();
    }

    print_summary(&summary);

    if !summary.project_stats.is_empty() {
        println!();
        print!("{}", project_table(&summary.project_stats, ctx.separator()).render());
    }

    Ok(())
}

fn print_summary(s: &DaySummary) {
    let next = s
        .next_expected
        .map(|k| k.label().to_string())
        .unwrap_or_else(|| "--".to_string());

    println!(
        "Status:     {}{}{}",
        color_for_status(s.status),
        s.status.label(),
        RESET
    );
    println!("Next:       {}", next);
    println!("Presence:   {}", ms2readable(s.presence_time, false));
    println!(
        "Remaining:  {}{}{}",
        color_for_remaining(s.remaining_time),
        ms2readable(s.remaining_time, false),
        RESET
    );
    println!("Completion: {}", percent(s.completion_percentage));
    println!("Projects:   {}", ms2readable(s.project_time, false));
}

pub(crate) fn project_table(stats: &[ProjectStat], separator: char) -> Table {
    let mut table = Table::new(
        vec![
            Column::new("Project", 24),
            Column::new("Time", 9),
            Column::new("%", 5),
            Column::new("Sessions", 8),
            Column::new("Average", 9),
            Column::new("", 7),
        ],
        separator,
    );

    for p in stats {
        table.add_row(vec![
            p.project_name.clone(),
            ms2readable(p.duration, false),
            pad_left(&percent(p.percentage), 4),
            pad_left(&p.session_count.to_string(), 8),
            ms2readable(p.average_session_duration, false),
            if p.is_running { "running".into() } else { String::new() },
        ]);
    }

    table
}
