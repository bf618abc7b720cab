// Keyboard navigation
// Maps a navigation key pressed on a day cell to the next focusable day

use chrono::{NaiveDate, Weekday};

use crate::models::ui::{NavigationKey, TextDirection};
use crate::utils::date::{end_of_week, shift_days, shift_month, start_of_week};

/// Day that should become focusable after `key` is pressed on `day`.
pub fn next_focusable(
    day: NaiveDate,
    key: NavigationKey,
    week_start: Weekday,
    direction: TextDirection,
) -> NaiveDate {
    let horizontal_step = if direction.is_rtl() { -1 } else { 1 };
    match key {
        NavigationKey::ArrowLeft => shift_days(day, -horizontal_step),
        NavigationKey::ArrowRight => shift_days(day, horizontal_step),
        NavigationKey::ArrowUp => shift_days(day, -7),
        NavigationKey::ArrowDown => shift_days(day, 7),
        NavigationKey::PageUp => shift_month(day, -1),
        NavigationKey::PageDown => shift_month(day, 1),
        NavigationKey::Home => start_of_week(day, week_start),
        NavigationKey::End => end_of_week(day, week_start),
    }
}
