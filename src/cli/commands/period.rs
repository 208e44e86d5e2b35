use crate::cli::{Context, print_json};
use crate::core::PeriodAggregator;
use crate::core::period::PeriodQuery;
use crate::errors::{AppError, AppResult};
use crate::models::stats::PeriodStats;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RED, RESET};
use crate::utils::date::{date_or, parse_date, weekday_short};
use crate::utils::formatting::pad_left;
use crate::utils::ms2readable;
use crate::utils::table::{Column, Table};

use super::day::project_table;

/// Handle `week`: the Monday-Sunday week around DATE.
pub fn handle_week(date: Option<&String>, ctx: &Context) -> AppResult<()> {
    let d = date_or(date, ctx.today())?;
    let data = ctx.dataset()?;

    let stats = PeriodAggregator::new(&ctx.calculator).week_stats(
        d,
        &data.entries,
        &data.sessions,
        &data.projects,
    );
    report(&stats, ctx)
}

/// Handle `month`: the calendar month around DATE.
pub fn handle_month(date: Option<&String>, ctx: &Context) -> AppResult<()> {
    let d = date_or(date, ctx.today())?;
    let data = ctx.dataset()?;

    let stats = PeriodAggregator::new(&ctx.calculator).month_stats(
        d,
        &data.entries,
        &data.sessions,
        &data.projects,
    );
    report(&stats, ctx)
}

/// Handle `range START END`.
pub fn handle_range(start: &str, end: &str, ctx: &Context) -> AppResult<()> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;
    if start_date > end_date {
        return Err(AppError::InvalidRange(format!("{start} is after {end}")));
    }
    let data = ctx.dataset()?;

    let stats = PeriodAggregator::new(&ctx.calculator).calculate_period_stats(PeriodQuery {
        start_date,
        end_date,
        entries: &data.entries,
        sessions: &data.sessions,
        projects: &data.projects,
    });
    report(&stats, ctx)
}

fn report(stats: &PeriodStats, ctx: &Context) -> AppResult<()> {
    if ctx.json {
        return print_json(stats);
    }

    print_period(stats, ctx);
    Ok(())
}

fn print_period(stats: &PeriodStats, ctx: &Context) {
    let p = &stats.period;
    let t = &stats.time;

    header(format!("{} → {}", p.start_date, p.end_date));
    println!(
        "Days: {} | Worked: {} | Complete: {} | Incomplete: {}",
        p.total_days, p.worked_days, p.complete_days, p.incomplete_days
    );
    println!(
        "Presence: {} (avg {}) | Projects: {} (avg {})",
        ms2readable(t.total_presence, false),
        ms2readable(t.average_presence_per_day, false),
        ms2readable(t.total_project, false),
        ms2readable(t.average_project_per_day, false)
    );
    println!();

    let mut days = Table::new(
        vec![
            Column::new("Date", if ctx.cfg.show_weekday { 15 } else { 11 }),
            Column::new("Presence", 9),
            Column::new("Projects", 9),
            Column::new("Done", 4),
        ],
        ctx.separator(),
    );

    for d in stats.daily_stats.iter().filter(|d| d.has_entries || d.project_time > 0) {
        let label = if ctx.cfg.show_weekday {
            format!("{} {}", d.date, weekday_short(d.date))
        } else {
            d.date.to_string()
        };
        days.add_row(vec![
            label,
            ms2readable(d.presence_time, false),
            ms2readable(d.project_time, false),
            if d.is_complete { "yes".into() } else { "no".into() },
        ]);
    }

    if days.rows.is_empty() {
        info("No entries in this period");
    } else {
        print!("{}", days.render());
    }

    if !stats.project_stats.is_empty() {
        println!();
        let flat: Vec<_> = stats.project_stats.iter().map(|p| p.stat.clone()).collect();
        print!("{}", project_table(&flat, ctx.separator()).render());
        print_project_days(stats, ctx);
    }

    if !stats.incomplete_days_list.is_empty() {
        println!();
        println!("Incomplete days:");
        for d in &stats.incomplete_days_list {
            println!(
                "  {}  {}  {}missing {}{}",
                d.date,
                ms2readable(d.presence_time, false),
                RED,
                ms2readable(d.missing_time, false),
                RESET
            );
        }
    }
}

/// Per-day / per-project matrix.
fn print_project_days(stats: &PeriodStats, ctx: &Context) {
    let dates: Vec<_> = stats
        .daily_stats
        .iter()
        .filter(|d| d.project_time > 0)
        .map(|d| d.date)
        .collect();

    if dates.is_empty() {
        return;
    }

    let mut columns = vec![Column::new("Date", 11)];
    columns.extend(
        stats
            .project_stats
            .iter()
            .map(|p| Column::fit(p.stat.project_name.clone(), 8)),
    );
    let mut matrix = Table::new(columns, ctx.separator());

    for date in dates {
        let mut row = vec![date.to_string()];
        for p in &stats.project_stats {
            let cell = p
                .daily_durations
                .get(&date)
                .map(|ms| ms2readable(*ms, false))
                .unwrap_or_else(|| "--".to_string());
            row.push(pad_left(&cell, 8));
        }
        matrix.add_row(row);
    }

    println!();
    print!("{}", matrix.render());
}
