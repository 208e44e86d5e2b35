use crate::cli::{Context, print_json};
use crate::errors::AppResult;
use crate::models::project::project_label;
use crate::ui::messages::{header, success, warning};
use crate::utils::date::date_or;
use crate::utils::ms2readable;

pub fn handle(date: Option<&String>, ctx: &Context) -> AppResult<()> {
    let date = date_or(date, ctx.today())?;
    let data = ctx.dataset()?;
    let (_, sessions) = data.for_date(date);

    let overlaps = ctx.calculator.find_session_overlaps(&sessions);

    if ctx.json {
        return print_json(&overlaps);
    }

    header(format!("Overlapping sessions {}", date));

    if overlaps.is_empty() {
        success("No overlapping sessions");
        return Ok(());
    }

    warning(format!("{} overlapping session pair(s)", overlaps.len()));
    for o in &overlaps {
        let (first, _) = project_label(&data.projects, &o.first_project_id);
        let (second, _) = project_label(&data.projects, &o.second_project_id);
        println!(
            "  {} - {}  {} / {}  ({})",
            o.start.format("%H:%M"),
            o.end.format("%H:%M"),
            first,
            second,
            ms2readable(o.duration, false)
        );
    }

    Ok(())
}
