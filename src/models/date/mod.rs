//! Date values accepted from the host and the month cursor derived from them.
//!
//! Host inputs are copied into owned `chrono` values on entry, so nothing a
//! caller does to its own value afterwards can leak into picker state.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PickerError, PickerResult};
use crate::utils::date::start_of_day;

/// Text layouts accepted by [`DateInput::Text`], tried in order.
const TEXT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A date-like value supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl DateInput {
    /// Strictly convert the input into a naive date-time.
    ///
    /// Text accepts the picker's own output format, ISO-8601 with or without
    /// fractional seconds, a bare `YYYY-MM-DD`, and RFC 3339 with an offset
    /// (converted to local time).
    pub fn parse(&self) -> PickerResult<NaiveDateTime> {
        match self {
            Self::Date(date) => Ok(start_of_day(*date)),
            Self::DateTime(date_time) => Ok(*date_time),
            Self::Text(text) => parse_text(text),
        }
    }

    /// Convert the input, falling back to `now` when it cannot be read.
    pub fn resolve_or(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self.parse() {
            Ok(date_time) => date_time,
            Err(err) => {
                log::warn!("{err}; falling back to {now}");
                now
            }
        }
    }
}

fn parse_text(text: &str) -> PickerResult<NaiveDateTime> {
    let trimmed = text.trim();
    for format in TEXT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Local).naive_local());
    }
    Err(PickerError::InvalidDateInput(text.to_string()))
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::DateTime(date_time)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Resolve an optional host date, using `now` when absent or malformed.
pub fn resolve_date_input(input: Option<&DateInput>, now: NaiveDateTime) -> NaiveDateTime {
    input.map_or(now, |value| value.resolve_or(now))
}

/// The month currently displayed by a calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ViewingMonth {
    pub year: i32,
    pub month: u32,
}

impl ViewingMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for ViewingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
