use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt::Write;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The instant the report is evaluated at: the wall clock, or the last
/// second of the `--as-of` day.
pub fn resolve_now(as_of: Option<&str>) -> AppResult<NaiveDateTime> {
    match as_of {
        None => Ok(Local::now().naive_local()),
        Some(s) => {
            let day = parse_date(s.trim()).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)
                .ok_or_else(|| AppError::Other("invalid end-of-day time".into()))?;
            Ok(day.and_time(end_of_day))
        }
    }
}

/// `now - days`; punches at or before this instant are stale.
pub fn stale_cutoff(now: NaiveDateTime, days: u32) -> NaiveDateTime {
    now - TimeDelta::days(i64::from(days))
}

/// Start of the job-listing window. Falls back to the earliest
/// representable instant when the subtraction leaves chrono's range.
pub fn lookback_start(now: NaiveDateTime, months: u32) -> NaiveDateTime {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Reject strftime patterns chrono cannot render.
pub fn check_file_pattern(pattern: &str) -> AppResult<()> {
    if pattern.trim().is_empty() {
        return Err(AppError::Config("file_pattern is empty".into()));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!(
            "file_pattern '{pattern}' is not a valid date format"
        )));
    }
    if pattern.contains('/') || pattern.contains('\\') {
        return Err(AppError::Config(format!(
            "file_pattern '{pattern}' must be a file name, not a path"
        )));
    }
    Ok(())
}

/// Render the spreadsheet file name for `date`.
pub fn format_file_name(date: NaiveDate, pattern: &str) -> AppResult<String> {
    check_file_pattern(pattern)?;
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| AppError::Config(format!("cannot format file_pattern '{pattern}'")))?;
    Ok(out)
}
