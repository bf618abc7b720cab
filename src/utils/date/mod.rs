// Date utility functions
// Day-granularity arithmetic shared by the grid, navigation and pickers

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Output format for every date string handed back to the host.
pub const TIMEZONELESS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Format a date-time the way change and month-preview notifications carry it.
pub fn format_timezoneless(date: NaiveDateTime) -> String {
    date.format(TIMEZONELESS_FORMAT).to_string()
}

/// Format with a caller-supplied `chrono` pattern, falling back to ISO
/// `YYYY-MM-DD` when the pattern is malformed.
pub fn format_date_or_iso(date: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        log::warn!("Invalid date format {pattern:?}; using ISO format");
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

/// Shift a date by whole days, saturating at the representable range.
pub fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(delta)).unwrap_or(date)
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Number of days `date` lies after the most recent `week_start`.
fn offset_in_week(date: NaiveDate, week_start: Weekday) -> i64 {
    let day = date.weekday().num_days_from_sunday() as i64;
    let start = week_start.num_days_from_sunday() as i64;
    (day - start).rem_euclid(7)
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    shift_days(date, -offset_in_week(date, week_start))
}

/// Last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    shift_days(start_of_week(date, week_start), 6)
}

/// Convert a 0-6 index (0 = Sunday) into a weekday.
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Replace the calendar day of `reference`, keeping its time-of-day.
pub fn with_day_keep_time(day: NaiveDate, reference: NaiveDateTime) -> NaiveDateTime {
    day.and_time(reference.time())
}
