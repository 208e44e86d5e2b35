use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.into()))
}

/// Parse an instant given on the command line.
/// Accepts `YYYY-MM-DD HH:MM[:SS]` and the ISO `T` separator.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Optional date argument, falling back to `today`.
pub fn date_or(arg: Option<&String>, today: NaiveDate) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(today),
    }
}

/// `Mon`, `Tue`, ...
pub fn weekday_short(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
