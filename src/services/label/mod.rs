//! Accessible labels for calendar day cells.
//!
//! The wording is part of the widget's observable contract for assistive
//! technology; keep the four templates and their singular/plural forms intact.

use chrono::NaiveDate;

use crate::utils::date::format_date_or_iso;

/// Label for the calendar container.
pub const CALENDAR_LABEL: &str = "Calendar";
/// Role exposed on the calendar container.
pub const CALENDAR_ROLE: &str = "application";
pub const PREVIOUS_MONTH_LABEL: &str = "View previous month";
pub const NEXT_MONTH_LABEL: &str = "View next month";

/// Build the label for one day cell.
pub fn day_label(date: NaiveDate, is_selected: bool, num_events: usize, date_format: &str) -> String {
    let localized = format_date_or_iso(date, date_format);
    compose_day_label(&localized, is_selected, num_events)
}

/// Compose a label from an already formatted date.
pub fn compose_day_label(localized_date: &str, is_selected: bool, num_events: usize) -> String {
    match (is_selected, num_events) {
        (true, 0) => format!("{localized_date}. Selected"),
        (true, 1) => format!("{localized_date}. Selected. There is 1 event"),
        (true, n) => format!("{localized_date}. Selected. There are {n} events"),
        (false, 0) => localized_date.to_string(),
        (false, 1) => format!("{localized_date}. There is 1 event"),
        (false, n) => format!("{localized_date}. There are {n} events"),
    }
}
