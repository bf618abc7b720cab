// Settings module
// Persisted picker preferences shared by every calendar a host renders

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};
use crate::models::ui::TextDirection;
use crate::utils::date::weekday_from_sunday_index;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// First day of the week, 0 = Sunday through 6 = Saturday
    pub week_start: u8,
    pub right_to_left: bool,
    /// `chrono` format used inside accessible day labels
    pub label_date_format: String,
    /// `chrono` format used for the month heading above the grid
    pub heading_format: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            week_start: 0, // Sunday
            right_to_left: false,
            label_date_format: "%B %-d, %Y".to_string(),
            heading_format: "%B %Y".to_string(),
        }
    }
}

impl PickerSettings {
    pub fn validate(&self) -> PickerResult<()> {
        if weekday_from_sunday_index(self.week_start).is_none() {
            return Err(PickerError::InvalidWeekStart(self.week_start));
        }
        if self.label_date_format.trim().is_empty() {
            return Err(PickerError::InvalidSettings(
                "label date format cannot be empty".to_string(),
            ));
        }
        if self.heading_format.trim().is_empty() {
            return Err(PickerError::InvalidSettings(
                "heading format cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Configured week start; out-of-range values read as Sunday.
    pub fn week_start_day(&self) -> Weekday {
        weekday_from_sunday_index(self.week_start).unwrap_or(Weekday::Sun)
    }

    pub fn text_direction(&self) -> TextDirection {
        if self.right_to_left {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }
}
