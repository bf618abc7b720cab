// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files

#![allow(dead_code)]

use calendar_picker::{DatePicker, DatePickerProps, DateRangePicker, DateRangePickerProps};
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Fixed "now" used as the fallback for absent dates
    pub fn fixed_now() -> NaiveDateTime {
        ymd(2030, 6, 1).and_hms_opt(12, 0, 0).unwrap()
    }

    /// Returns Jan 15, 2025 (a Wednesday) at 10:20:30
    pub fn mid_january_2025() -> NaiveDateTime {
        ymd(2025, 1, 15).and_hms_opt(10, 20, 30).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        ymd(2024, 2, 29).and_hms_opt(12, 0, 0).unwrap()
    }

    /// Returns Dec 31, 2025 at 23:59 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDateTime {
        ymd(2025, 12, 31).and_hms_opt(23, 59, 0).unwrap()
    }
}

/// Pickers ready for interaction
pub mod pickers {
    use super::*;

    pub fn single_on(date: NaiveDateTime) -> DatePicker {
        DatePicker::new_at(
            DatePickerProps::default().with_current_date(date),
            dates::fixed_now(),
        )
    }

    pub fn range_between(start: NaiveDateTime, end: NaiveDateTime) -> DateRangePicker {
        DateRangePicker::new_at(
            DateRangePickerProps {
                current_date_start: Some(start.into()),
                current_date_end: Some(end.into()),
                ..Default::default()
            },
            dates::fixed_now(),
        )
    }
}
